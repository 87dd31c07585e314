use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Reference, Resource, UniqueValue};
use crate::validation::{require_id, require_text, ValidationError};
use crate::Locality;

/// A company selling products through the platform, keyed by its `cid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: i64,
    pub cid: i64,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSeller {
    pub cid: i64,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SellerChanges {
    pub cid: Option<i64>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i64>,
}

impl Record for Seller {
    const COLLECTION: &'static str = "sellers";
    const LABEL: &'static str = "seller";
    const UNIQUE_FIELD: Option<&'static str> = Some("cid");

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_value(&self) -> Option<UniqueValue> {
        Some(UniqueValue::Int(self.cid))
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::to::<Locality>(self.locality_id)]
    }
}

impl Resource for Seller {
    type Draft = NewSeller;
    type Changes = SellerChanges;

    fn from_draft(draft: NewSeller) -> Self {
        Self {
            id: 0,
            cid: draft.cid,
            company_name: draft.company_name,
            address: draft.address,
            telephone: draft.telephone,
            locality_id: draft.locality_id,
        }
    }

    fn merge(&mut self, changes: SellerChanges) {
        overwrite(&mut self.cid, changes.cid);
        overwrite(&mut self.company_name, changes.company_name);
        overwrite(&mut self.address, changes.address);
        overwrite(&mut self.telephone, changes.telephone);
        overwrite(&mut self.locality_id, changes.locality_id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_id("cid", self.cid)?;
        require_text("company_name", &self.company_name)?;
        require_text("address", &self.address)?;
        require_text("telephone", &self.telephone)?;
        require_id("locality_id", self.locality_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_references_its_locality() {
        let seller = Seller::from_draft(NewSeller {
            cid: 42,
            company_name: "Frutas do Vale".to_string(),
            address: "Av. Brasil 100".to_string(),
            telephone: "1133334444".to_string(),
            locality_id: 7,
        });
        assert_eq!(
            seller.references(),
            vec![Reference {
                collection: "localities",
                label: "locality",
                id: 7
            }]
        );
        assert_eq!(seller.unique_value(), Some(UniqueValue::Int(42)));
    }

    #[test]
    fn test_cid_must_be_positive() {
        let mut seller = Seller::from_draft(NewSeller {
            cid: 1,
            company_name: "Frutas do Vale".to_string(),
            address: "Av. Brasil 100".to_string(),
            telephone: "1133334444".to_string(),
            locality_id: 7,
        });
        seller.merge(SellerChanges {
            cid: Some(0),
            ..Default::default()
        });
        assert!(matches!(
            seller.validate(),
            Err(ValidationError::Invalid { field: "cid", .. })
        ));
    }
}
