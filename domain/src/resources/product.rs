use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Reference, Resource, UniqueValue};
use crate::validation::{require_amount, require_finite, require_id, require_text, ValidationError};
use crate::Seller;

/// A catalogue product offered by a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i64,
    pub seller_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i64,
    pub seller_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductChanges {
    pub product_code: Option<String>,
    pub description: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub net_weight: Option<f64>,
    pub expiration_rate: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub freezing_rate: Option<f64>,
    pub product_type_id: Option<i64>,
    pub seller_id: Option<i64>,
}

impl Record for Product {
    const COLLECTION: &'static str = "products";
    const LABEL: &'static str = "product";
    const UNIQUE_FIELD: Option<&'static str> = Some("product_code");

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_value(&self) -> Option<UniqueValue> {
        Some(UniqueValue::Text(self.product_code.clone()))
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::to::<Seller>(self.seller_id)]
    }
}

impl Resource for Product {
    type Draft = NewProduct;
    type Changes = ProductChanges;

    fn from_draft(draft: NewProduct) -> Self {
        Self {
            id: 0,
            product_code: draft.product_code,
            description: draft.description,
            width: draft.width,
            height: draft.height,
            length: draft.length,
            net_weight: draft.net_weight,
            expiration_rate: draft.expiration_rate,
            recommended_freezing_temperature: draft.recommended_freezing_temperature,
            freezing_rate: draft.freezing_rate,
            product_type_id: draft.product_type_id,
            seller_id: draft.seller_id,
        }
    }

    fn merge(&mut self, changes: ProductChanges) {
        overwrite(&mut self.product_code, changes.product_code);
        overwrite(&mut self.description, changes.description);
        overwrite(&mut self.width, changes.width);
        overwrite(&mut self.height, changes.height);
        overwrite(&mut self.length, changes.length);
        overwrite(&mut self.net_weight, changes.net_weight);
        overwrite(&mut self.expiration_rate, changes.expiration_rate);
        overwrite(
            &mut self.recommended_freezing_temperature,
            changes.recommended_freezing_temperature,
        );
        overwrite(&mut self.freezing_rate, changes.freezing_rate);
        overwrite(&mut self.product_type_id, changes.product_type_id);
        overwrite(&mut self.seller_id, changes.seller_id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("product_code", &self.product_code)?;
        require_text("description", &self.description)?;
        require_amount("width", self.width)?;
        require_amount("height", self.height)?;
        require_amount("length", self.length)?;
        require_amount("net_weight", self.net_weight)?;
        require_amount("expiration_rate", self.expiration_rate)?;
        require_finite(
            "recommended_freezing_temperature",
            self.recommended_freezing_temperature,
        )?;
        require_amount("freezing_rate", self.freezing_rate)?;
        require_id("product_type_id", self.product_type_id)?;
        require_id("seller_id", self.seller_id)
    }
}
