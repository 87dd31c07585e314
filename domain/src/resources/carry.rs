use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Reference, Resource, UniqueValue};
use crate::validation::{require_id, require_text, ValidationError};
use crate::Locality;

/// A carrier company serving a locality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carry {
    pub id: i64,
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCarry {
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarryChanges {
    pub cid: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i64>,
}

impl Record for Carry {
    const COLLECTION: &'static str = "carries";
    const LABEL: &'static str = "carry";
    const UNIQUE_FIELD: Option<&'static str> = Some("cid");

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_value(&self) -> Option<UniqueValue> {
        Some(UniqueValue::Text(self.cid.clone()))
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::to::<Locality>(self.locality_id)]
    }
}

impl Resource for Carry {
    type Draft = NewCarry;
    type Changes = CarryChanges;

    fn from_draft(draft: NewCarry) -> Self {
        Self {
            id: 0,
            cid: draft.cid,
            company_name: draft.company_name,
            address: draft.address,
            telephone: draft.telephone,
            locality_id: draft.locality_id,
        }
    }

    fn merge(&mut self, changes: CarryChanges) {
        overwrite(&mut self.cid, changes.cid);
        overwrite(&mut self.company_name, changes.company_name);
        overwrite(&mut self.address, changes.address);
        overwrite(&mut self.telephone, changes.telephone);
        overwrite(&mut self.locality_id, changes.locality_id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("cid", &self.cid)?;
        require_text("company_name", &self.company_name)?;
        require_text("address", &self.address)?;
        require_text("telephone", &self.telephone)?;
        require_id("locality_id", self.locality_id)
    }
}
