use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Resource, UniqueValue};
use crate::validation::{require_text, ValidationError};

/// A place sellers, carries and warehouses are registered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    pub id: i64,
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLocality {
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalityChanges {
    pub zip_code: Option<String>,
    pub locality_name: Option<String>,
    pub province_name: Option<String>,
    pub country_name: Option<String>,
}

impl Record for Locality {
    const COLLECTION: &'static str = "localities";
    const LABEL: &'static str = "locality";
    const UNIQUE_FIELD: Option<&'static str> = Some("zip_code");

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_value(&self) -> Option<UniqueValue> {
        Some(UniqueValue::Text(self.zip_code.clone()))
    }
}

impl Resource for Locality {
    type Draft = NewLocality;
    type Changes = LocalityChanges;

    fn from_draft(draft: NewLocality) -> Self {
        Self {
            id: 0,
            zip_code: draft.zip_code,
            locality_name: draft.locality_name,
            province_name: draft.province_name,
            country_name: draft.country_name,
        }
    }

    fn merge(&mut self, changes: LocalityChanges) {
        overwrite(&mut self.zip_code, changes.zip_code);
        overwrite(&mut self.locality_name, changes.locality_name);
        overwrite(&mut self.province_name, changes.province_name);
        overwrite(&mut self.country_name, changes.country_name);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("zip_code", &self.zip_code)?;
        require_text("locality_name", &self.locality_name)?;
        require_text("province_name", &self.province_name)?;
        require_text("country_name", &self.country_name)
    }
}
