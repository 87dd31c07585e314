use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Resource, UniqueValue};
use crate::validation::{require_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBuyer {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuyerChanges {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Record for Buyer {
    const COLLECTION: &'static str = "buyers";
    const LABEL: &'static str = "buyer";
    const UNIQUE_FIELD: Option<&'static str> = Some("card_number_id");

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_value(&self) -> Option<UniqueValue> {
        Some(UniqueValue::Text(self.card_number_id.clone()))
    }
}

impl Resource for Buyer {
    type Draft = NewBuyer;
    type Changes = BuyerChanges;

    fn from_draft(draft: NewBuyer) -> Self {
        Self {
            id: 0,
            card_number_id: draft.card_number_id,
            first_name: draft.first_name,
            last_name: draft.last_name,
        }
    }

    fn merge(&mut self, changes: BuyerChanges) {
        overwrite(&mut self.card_number_id, changes.card_number_id);
        overwrite(&mut self.first_name, changes.first_name);
        overwrite(&mut self.last_name, changes.last_name);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("card_number_id", &self.card_number_id)?;
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)
    }
}
