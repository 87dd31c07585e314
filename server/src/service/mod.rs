//! Business rules between the HTTP handlers and the repositories.
//!
//! - resources: generic CRUD with the business-key guard and reference checks
//! - reports: child-count aggregations

mod reports;
mod resources;

pub use reports::ReportService;
pub use resources::ResourceService;

use crate::persistence::PersistenceError;
use mercado_domain::ValidationError;

/// Errors the handlers map to HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{label} with id: {id} does not exist")]
    NotFound { label: &'static str, id: i64 },
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("storage failure: {0}")]
    Storage(PersistenceError),
}

impl From<PersistenceError> for ServiceError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { label, id } => ServiceError::NotFound { label, id },
            PersistenceError::Duplicate { field, .. } => {
                ServiceError::Conflict(format!("{field} already exists"))
            }
            other => ServiceError::Storage(other),
        }
    }
}
