use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Reference, Resource, UniqueValue};
use crate::validation::{require_id, require_text, ValidationError};
use crate::Warehouse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeChanges {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<i64>,
}

impl Record for Employee {
    const COLLECTION: &'static str = "employees";
    const LABEL: &'static str = "employee";
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

    fn references(&self) -> Vec<Reference> {
        vec![Reference::to::<Warehouse>(self.warehouse_id)]
    }
}

impl Resource for Employee {
    type Draft = NewEmployee;
    type Changes = EmployeeChanges;

    fn from_draft(draft: NewEmployee) -> Self {
        Self {
            id: 0,
            card_number_id: draft.card_number_id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            warehouse_id: draft.warehouse_id,
        }
    }

    fn merge(&mut self, changes: EmployeeChanges) {
        overwrite(&mut self.card_number_id, changes.card_number_id);
        overwrite(&mut self.first_name, changes.first_name);
        overwrite(&mut self.last_name, changes.last_name);
        overwrite(&mut self.warehouse_id, changes.warehouse_id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("card_number_id", &self.card_number_id)?;
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;
        require_id("warehouse_id", self.warehouse_id)
    }
}
