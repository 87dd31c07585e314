use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Resource, UniqueValue};
use crate::validation::{require_count, require_finite, require_id, require_text, ValidationError};

/// A storage facility. `locality_id` is informational and not checked
/// against the localities collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
    #[serde(default)]
    pub minimum_capacity: i64,
    #[serde(default)]
    pub minimum_temperature: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWarehouse {
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
    #[serde(default)]
    pub minimum_capacity: i64,
    #[serde(default)]
    pub minimum_temperature: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WarehouseChanges {
    pub warehouse_code: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i64>,
    pub minimum_capacity: Option<i64>,
    pub minimum_temperature: Option<f64>,
}

impl Record for Warehouse {
    const COLLECTION: &'static str = "warehouses";
    const LABEL: &'static str = "warehouse";
    const UNIQUE_FIELD: Option<&'static str> = Some("warehouse_code");

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_value(&self) -> Option<UniqueValue> {
        Some(UniqueValue::Text(self.warehouse_code.clone()))
    }
}

impl Resource for Warehouse {
    type Draft = NewWarehouse;
    type Changes = WarehouseChanges;

    fn from_draft(draft: NewWarehouse) -> Self {
        Self {
            id: 0,
            warehouse_code: draft.warehouse_code,
            address: draft.address,
            telephone: draft.telephone,
            locality_id: draft.locality_id,
            minimum_capacity: draft.minimum_capacity,
            minimum_temperature: draft.minimum_temperature,
        }
    }

    fn merge(&mut self, changes: WarehouseChanges) {
        overwrite(&mut self.warehouse_code, changes.warehouse_code);
        overwrite(&mut self.address, changes.address);
        overwrite(&mut self.telephone, changes.telephone);
        overwrite(&mut self.locality_id, changes.locality_id);
        overwrite(&mut self.minimum_capacity, changes.minimum_capacity);
        overwrite(&mut self.minimum_temperature, changes.minimum_temperature);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("warehouse_code", &self.warehouse_code)?;
        require_text("address", &self.address)?;
        require_text("telephone", &self.telephone)?;
        require_id("locality_id", self.locality_id)?;
        require_count("minimum_capacity", self.minimum_capacity)?;
        require_finite("minimum_temperature", self.minimum_temperature)
    }
}
