use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Reference, Resource, UniqueValue};
use crate::validation::{require_id, require_text, ValidationError};
use crate::{Buyer, ProductRecord};

/// An order placed by a buyer against a priced product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    pub order_number: String,
    pub order_date: String,
    pub tracking_code: String,
    pub buyer_id: i64,
    pub product_record_id: i64,
    pub order_status_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPurchaseOrder {
    pub order_number: String,
    pub order_date: String,
    pub tracking_code: String,
    pub buyer_id: i64,
    pub product_record_id: i64,
    pub order_status_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseOrderChanges {
    pub order_number: Option<String>,
    pub order_date: Option<String>,
    pub tracking_code: Option<String>,
    pub buyer_id: Option<i64>,
    pub product_record_id: Option<i64>,
    pub order_status_id: Option<i64>,
}

impl Record for PurchaseOrder {
    const COLLECTION: &'static str = "purchase_orders";
    const LABEL: &'static str = "purchase order";
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
            Reference::to::<Buyer>(self.buyer_id),
            Reference::to::<ProductRecord>(self.product_record_id),
        ]
    }
}

impl Resource for PurchaseOrder {
    type Draft = NewPurchaseOrder;
    type Changes = PurchaseOrderChanges;

    fn from_draft(draft: NewPurchaseOrder) -> Self {
        Self {
            id: 0,
            order_number: draft.order_number,
            order_date: draft.order_date,
            tracking_code: draft.tracking_code,
            buyer_id: draft.buyer_id,
            product_record_id: draft.product_record_id,
            order_status_id: draft.order_status_id,
        }
    }

    fn merge(&mut self, changes: PurchaseOrderChanges) {
        overwrite(&mut self.order_number, changes.order_number);
        overwrite(&mut self.order_date, changes.order_date);
        overwrite(&mut self.tracking_code, changes.tracking_code);
        overwrite(&mut self.buyer_id, changes.buyer_id);
        overwrite(&mut self.product_record_id, changes.product_record_id);
        overwrite(&mut self.order_status_id, changes.order_status_id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("order_number", &self.order_number)?;
        require_text("order_date", &self.order_date)?;
        require_text("tracking_code", &self.tracking_code)?;
        require_id("buyer_id", self.buyer_id)?;
        require_id("product_record_id", self.product_record_id)?;
        require_id("order_status_id", self.order_status_id)
    }
}
