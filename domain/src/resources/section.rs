use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Record, Reference, Resource, UniqueValue};
use crate::validation::{require_count, require_finite, require_id, ValidationError};
use crate::Warehouse;

/// A temperature-controlled area inside a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub section_number: i64,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i64,
    pub minimum_capacity: i64,
    pub maximum_capacity: i64,
    pub warehouse_id: i64,
    pub product_type_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSection {
    pub section_number: i64,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i64,
    pub minimum_capacity: i64,
    pub maximum_capacity: i64,
    pub warehouse_id: i64,
    pub product_type_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionChanges {
    pub section_number: Option<i64>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    pub current_capacity: Option<i64>,
    pub minimum_capacity: Option<i64>,
    pub maximum_capacity: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub product_type_id: Option<i64>,
}

impl Record for Section {
    const COLLECTION: &'static str = "sections";
    const LABEL: &'static str = "section";
    const UNIQUE_FIELD: Option<&'static str> = Some("section_number");

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_value(&self) -> Option<UniqueValue> {
        Some(UniqueValue::Int(self.section_number))
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::to::<Warehouse>(self.warehouse_id)]
    }
}

impl Resource for Section {
    type Draft = NewSection;
    type Changes = SectionChanges;

    fn from_draft(draft: NewSection) -> Self {
        Self {
            id: 0,
            section_number: draft.section_number,
            current_temperature: draft.current_temperature,
            minimum_temperature: draft.minimum_temperature,
            current_capacity: draft.current_capacity,
            minimum_capacity: draft.minimum_capacity,
            maximum_capacity: draft.maximum_capacity,
            warehouse_id: draft.warehouse_id,
            product_type_id: draft.product_type_id,
        }
    }

    fn merge(&mut self, changes: SectionChanges) {
        overwrite(&mut self.section_number, changes.section_number);
        overwrite(&mut self.current_temperature, changes.current_temperature);
        overwrite(&mut self.minimum_temperature, changes.minimum_temperature);
        overwrite(&mut self.current_capacity, changes.current_capacity);
        overwrite(&mut self.minimum_capacity, changes.minimum_capacity);
        overwrite(&mut self.maximum_capacity, changes.maximum_capacity);
        overwrite(&mut self.warehouse_id, changes.warehouse_id);
        overwrite(&mut self.product_type_id, changes.product_type_id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_id("section_number", self.section_number)?;
        require_finite("current_temperature", self.current_temperature)?;
        require_finite("minimum_temperature", self.minimum_temperature)?;
        require_count("current_capacity", self.current_capacity)?;
        require_count("minimum_capacity", self.minimum_capacity)?;
        require_count("maximum_capacity", self.maximum_capacity)?;
        if self.minimum_capacity > self.maximum_capacity {
            return Err(ValidationError::Invalid {
                field: "minimum_capacity",
                reason: "must not exceed maximum_capacity",
            });
        }
        require_id("warehouse_id", self.warehouse_id)?;
        require_id("product_type_id", self.product_type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Section {
        Section::from_draft(NewSection {
            section_number: 3,
            current_temperature: 2.0,
            minimum_temperature: -4.0,
            current_capacity: 40,
            minimum_capacity: 10,
            maximum_capacity: 100,
            warehouse_id: 1,
            product_type_id: 2,
        })
    }

    #[test]
    fn test_capacity_bounds_are_checked_after_merge() {
        let mut section = sample();
        assert!(section.validate().is_ok());

        section.merge(SectionChanges {
            maximum_capacity: Some(5),
            ..Default::default()
        });
        assert!(matches!(
            section.validate(),
            Err(ValidationError::Invalid {
                field: "minimum_capacity",
                ..
            })
        ));
    }
}
