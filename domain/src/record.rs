//! Traits shared by every persisted resource.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A business-unique value. Some resources key on text codes, others on
/// integer registration numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UniqueValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for UniqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueValue::Int(v) => write!(f, "{v}"),
            UniqueValue::Text(v) => f.write_str(v),
        }
    }
}

/// A foreign reference from one record to another collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub collection: &'static str,
    pub label: &'static str,
    pub id: i64,
}

impl Reference {
    /// Reference to the record of type `R` with the given id.
    pub fn to<R: Record>(id: i64) -> Self {
        Self {
            collection: R::COLLECTION,
            label: R::LABEL,
            id,
        }
    }
}

/// A persisted entity with a server-assigned id.
pub trait Record:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static
{
    /// SQL table name and JSON file stem.
    const COLLECTION: &'static str;
    /// Singular name used in error messages.
    const LABEL: &'static str;
    /// Field holding the business key, if the resource has one.
    const UNIQUE_FIELD: Option<&'static str> = None;

    fn id(&self) -> i64;

    fn assign_id(&mut self, id: i64);

    fn unique_value(&self) -> Option<UniqueValue> {
        None
    }

    /// Records in other collections that must exist for this one to be valid.
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }
}

/// A record that can be created and patched over HTTP.
pub trait Resource: Record {
    /// Body of a create request. Every mandatory field is required by serde.
    type Draft: DeserializeOwned + Send + 'static;
    /// Body of a partial update. Absent fields leave the stored value alone.
    type Changes: DeserializeOwned + Send + 'static;

    /// Build an unsaved record (id 0) from a create request.
    fn from_draft(draft: Self::Draft) -> Self;

    /// Overwrite the fields present in `changes`.
    fn merge(&mut self, changes: Self::Changes);

    fn validate(&self) -> Result<(), crate::ValidationError>;
}

pub(crate) fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
