//! Persistence layer.
//!
//! Every resource is stored through the generic [`Repository`] contract,
//! backed either by SQLite ([`SqliteRepository`]) or by one JSON array file
//! per collection ([`JsonRepository`]). [`Store`] picks the backend once at
//! startup and hands out repositories for any record type.

mod json_repo;
mod json_store;
pub mod sqlite;
mod store;
pub mod traits;

pub(crate) use json_store::JsonStore;

pub use json_repo::{JsonCatalog, JsonRepository};
pub use sqlite::{Database, SqlRecord, SqliteRepository};
pub use store::{AnyRepository, Store};
pub use traits::{Relations, Repository};

use mercado_domain::UniqueValue;

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("{label} with id: {id} does not exist")]
    NotFound { label: &'static str, id: i64 },
    #[error("{label} could not be saved: no rows affected")]
    SaveFailed { label: &'static str },
    #[error("{field} already exists")]
    Duplicate {
        field: &'static str,
        value: UniqueValue,
    },
}
