use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Reference, Resource, UniqueValue};
use crate::validation::{require_id, require_text, ValidationError};
use crate::{Employee, Warehouse};

/// Goods received into a warehouse, registered by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundOrder {
    pub id: i64,
    pub order_number: String,
    pub order_date: String,
    pub employee_id: i64,
    pub product_batch_id: i64,
    pub warehouse_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewInboundOrder {
    pub order_number: String,
    pub order_date: String,
    pub employee_id: i64,
    pub product_batch_id: i64,
    pub warehouse_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundOrderChanges {
    pub order_number: Option<String>,
    pub order_date: Option<String>,
    pub employee_id: Option<i64>,
    pub product_batch_id: Option<i64>,
    pub warehouse_id: Option<i64>,
}

impl Record for InboundOrder {
    const COLLECTION: &'static str = "inbound_orders";
    const LABEL: &'static str = "inbound order";
    const UNIQUE_FIELD: Option<&'static str> = Some("order_number");

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_value(&self) -> Option<UniqueValue> {
        Some(UniqueValue::Text(self.order_number.clone()))
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::to::<Employee>(self.employee_id),
            Reference::to::<Warehouse>(self.warehouse_id),
        ]
    }
}

impl Resource for InboundOrder {
    type Draft = NewInboundOrder;
    type Changes = InboundOrderChanges;

    fn from_draft(draft: NewInboundOrder) -> Self {
        Self {
            id: 0,
            order_number: draft.order_number,
            order_date: draft.order_date,
            employee_id: draft.employee_id,
            product_batch_id: draft.product_batch_id,
            warehouse_id: draft.warehouse_id,
        }
    }

    fn merge(&mut self, changes: InboundOrderChanges) {
        overwrite(&mut self.order_number, changes.order_number);
        overwrite(&mut self.order_date, changes.order_date);
        overwrite(&mut self.employee_id, changes.employee_id);
        overwrite(&mut self.product_batch_id, changes.product_batch_id);
        overwrite(&mut self.warehouse_id, changes.warehouse_id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("order_number", &self.order_number)?;
        require_text("order_date", &self.order_date)?;
        require_id("employee_id", self.employee_id)?;
        require_id("product_batch_id", self.product_batch_id)?;
        require_id("warehouse_id", self.warehouse_id)
    }
}
