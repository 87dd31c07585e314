//! Backend selection.

use mercado_domain::{CountReport, UniqueValue};

use super::traits::{Relations, Repository};
use super::{Database, JsonCatalog, JsonRepository, PersistenceError, SqlRecord, SqliteRepository};

/// The storage backend chosen at startup. Cheap to clone; every clone
/// shares the same pool or file locks.
#[derive(Clone)]
pub enum Store {
    Sqlite(Database),
    Json(JsonCatalog),
}

impl Store {
    pub fn backend(&self) -> &'static str {
        match self {
            Store::Sqlite(_) => "sqlite",
            Store::Json(_) => "json",
        }
    }

    pub fn repository<E: SqlRecord>(&self) -> AnyRepository<E> {
        match self {
            Store::Sqlite(db) => AnyRepository::Sqlite(SqliteRepository::new(db.pool().clone())),
            Store::Json(catalog) => AnyRepository::Json(catalog.repository()),
        }
    }
}

impl Relations for Store {
    async fn exists(&self, collection: &'static str, id: i64) -> Result<bool, PersistenceError> {
        match self {
            Store::Sqlite(db) => db.exists(collection, id).await,
            Store::Json(catalog) => catalog.exists(collection, id).await,
        }
    }

    async fn count_children<R>(&self, parent_id: Option<i64>) -> Result<Vec<R::Row>, PersistenceError>
    where
        R: CountReport,
        R::Parent: SqlRecord,
        R::Child: SqlRecord,
    {
        match self {
            Store::Sqlite(db) => db.count_children::<R>(parent_id).await,
            Store::Json(catalog) => catalog.count_children::<R>(parent_id).await,
        }
    }
}

/// A repository on whichever backend the [`Store`] uses.
pub enum AnyRepository<E> {
    Sqlite(SqliteRepository<E>),
    Json(JsonRepository<E>),
}

impl<E: SqlRecord> Repository<E> for AnyRepository<E> {
    async fn get_all(&self) -> Result<Vec<E>, PersistenceError> {
        match self {
            AnyRepository::Sqlite(repo) => repo.get_all().await,
            AnyRepository::Json(repo) => repo.get_all().await,
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<E, PersistenceError> {
        match self {
            AnyRepository::Sqlite(repo) => repo.get_by_id(id).await,
            AnyRepository::Json(repo) => repo.get_by_id(id).await,
        }
    }

    async fn find_by_unique(&self, value: &UniqueValue) -> Result<Option<E>, PersistenceError> {
        match self {
            AnyRepository::Sqlite(repo) => repo.find_by_unique(value).await,
            AnyRepository::Json(repo) => repo.find_by_unique(value).await,
        }
    }

    async fn create(&self, record: E) -> Result<E, PersistenceError> {
        match self {
            AnyRepository::Sqlite(repo) => repo.create(record).await,
            AnyRepository::Json(repo) => repo.create(record).await,
        }
    }

    async fn update(&self, record: E) -> Result<E, PersistenceError> {
        match self {
            AnyRepository::Sqlite(repo) => repo.update(record).await,
            AnyRepository::Json(repo) => repo.update(record).await,
        }
    }

    async fn delete(&self, id: i64) -> Result<(), PersistenceError> {
        match self {
            AnyRepository::Sqlite(repo) => repo.delete(id).await,
            AnyRepository::Json(repo) => repo.delete(id).await,
        }
    }
}
