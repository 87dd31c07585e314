//! Async repository trait definitions for the persistence layer.
//!
//! Both the JSON-file and SQLite backends implement these traits so the
//! service layer can use either via static dispatch.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send`, which axum handlers and
//! `tokio::spawn` both require.

use super::{PersistenceError, SqlRecord};
use mercado_domain::{CountReport, Record, UniqueValue};
use std::future::Future;

/// CRUD and lookup for one collection of records.
pub trait Repository<E: Record>: Send + Sync {
    /// Every live record, ordered by id. Empty when the collection is.
    fn get_all(&self) -> impl Future<Output = Result<Vec<E>, PersistenceError>> + Send;

    /// Fails with `NotFound` when no record has this id.
    fn get_by_id(&self, id: i64) -> impl Future<Output = Result<E, PersistenceError>> + Send;

    /// Look a record up by its business key. Always `None` for collections
    /// without one.
    fn find_by_unique(
        &self,
        value: &UniqueValue,
    ) -> impl Future<Output = Result<Option<E>, PersistenceError>> + Send;

    /// Persist a new record. The id on `record` is ignored and the assigned
    /// one is set on the returned value.
    ///
    /// Implementations must reject a duplicate business key atomically with
    /// the write (`Duplicate`), so concurrent creates cannot both succeed.
    fn create(&self, record: E) -> impl Future<Output = Result<E, PersistenceError>> + Send;

    /// Replace the stored record with the same id.
    fn update(&self, record: E) -> impl Future<Output = Result<E, PersistenceError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}

/// Queries that span collections.
pub trait Relations: Send + Sync {
    /// Whether `collection` holds a record with this id.
    fn exists(
        &self,
        collection: &'static str,
        id: i64,
    ) -> impl Future<Output = Result<bool, PersistenceError>> + Send;

    /// Child counts per parent, recomputed on every call. With `parent_id`
    /// set, only that parent is reported and its absence is `NotFound`.
    fn count_children<R>(
        &self,
        parent_id: Option<i64>,
    ) -> impl Future<Output = Result<Vec<R::Row>, PersistenceError>> + Send
    where
        R: CountReport,
        R::Parent: SqlRecord,
        R::Child: SqlRecord;
}
