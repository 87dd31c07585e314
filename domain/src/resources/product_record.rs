use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Reference, Resource};
use crate::validation::{require_amount, require_id, require_text, ValidationError};
use crate::Product;

/// A dated price entry for a product. Has no business key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub last_update_date: String,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub product_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProductRecord {
    pub last_update_date: String,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub product_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRecordChanges {
    pub last_update_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub product_id: Option<i64>,
}

impl Record for ProductRecord {
    const COLLECTION: &'static str = "product_records";
    const LABEL: &'static str = "product record";

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::to::<Product>(self.product_id)]
    }
}

impl Resource for ProductRecord {
    type Draft = NewProductRecord;
    type Changes = ProductRecordChanges;

    fn from_draft(draft: NewProductRecord) -> Self {
        Self {
            id: 0,
            last_update_date: draft.last_update_date,
            purchase_price: draft.purchase_price,
            sale_price: draft.sale_price,
            product_id: draft.product_id,
        }
    }

    fn merge(&mut self, changes: ProductRecordChanges) {
        overwrite(&mut self.last_update_date, changes.last_update_date);
        overwrite(&mut self.purchase_price, changes.purchase_price);
        overwrite(&mut self.sale_price, changes.sale_price);
        overwrite(&mut self.product_id, changes.product_id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("last_update_date", &self.last_update_date)?;
        require_amount("purchase_price", self.purchase_price)?;
        require_amount("sale_price", self.sale_price)?;
        require_id("product_id", self.product_id)
    }
}
