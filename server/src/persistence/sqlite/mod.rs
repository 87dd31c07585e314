//! SQLite-backed repository implementations.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with:
//! - **WAL mode**: one writer and multiple concurrent readers.
//! - **Embedded migrations**: `sqlx::migrate!` runs `migrations/001_initial_schema.sql`
//!   when [`Database::open`] is called. The schema is idempotent.
//!
//! The pool is created once by `main` and cloned into every repository.
//!
//! ## Repository types
//!
//! [`SqliteRepository<E>`] implements `Repository<E>` for every record type
//! that implements [`SqlRecord`]: the table name comes from
//! `Record::COLLECTION`, the column list and row mapping from `SqlRecord`.
//! Business keys carry a `UNIQUE` constraint; a violation surfaces as
//! `PersistenceError::Duplicate`.
//!
//! `Database` itself implements `Relations` (existence checks and
//! `LEFT JOIN ... GROUP BY` child counts).

mod database;
pub(crate) mod helpers;
#[cfg(test)]
mod integration_tests;
mod records;
mod relations;
mod repository;

pub use database::Database;
pub use records::SqlRecord;
pub use repository::SqliteRepository;
