//! Generic SQLite repository over any [`SqlRecord`].

use std::marker::PhantomData;

use mercado_domain::{Record, UniqueValue};
use sqlx::SqlitePool;

use super::helpers::{assignments, bind_unique, is_unique_violation, placeholders, select_list};
use super::records::SqlRecord;
use crate::persistence::traits::Repository;
use crate::persistence::PersistenceError;

/// SQLite implementation of [`Repository`] for the table `E::COLLECTION`.
pub struct SqliteRepository<E> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> E>,
}

impl<E> SqliteRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

/// Map a `UNIQUE` constraint failure on `record` to `Duplicate`.
fn translate<E: Record>(err: sqlx::Error, record: &E) -> PersistenceError {
    if is_unique_violation(&err) {
        if let (Some(field), Some(value)) = (E::UNIQUE_FIELD, record.unique_value()) {
            return PersistenceError::Duplicate { field, value };
        }
    }
    PersistenceError::Database(err)
}

impl<E: SqlRecord> Repository<E> for SqliteRepository<E> {
    async fn get_all(&self) -> Result<Vec<E>, PersistenceError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            select_list(E::COLUMNS),
            E::COLLECTION
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let records = rows.iter().map(E::from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    async fn get_by_id(&self, id: i64) -> Result<E, PersistenceError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?",
            select_list(E::COLUMNS),
            E::COLLECTION
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(PersistenceError::NotFound { label: E::LABEL, id })?;
        Ok(E::from_row(&row)?)
    }

    async fn find_by_unique(&self, value: &UniqueValue) -> Result<Option<E>, PersistenceError> {
        let Some(field) = E::UNIQUE_FIELD else {
            return Ok(None);
        };
        let sql = format!(
            "SELECT {} FROM {} WHERE {field} = ?",
            select_list(E::COLUMNS),
            E::COLLECTION
        );
        let row = bind_unique(sqlx::query(&sql), value)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(Some(E::from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, mut record: E) -> Result<E, PersistenceError> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::COLLECTION,
            E::COLUMNS.join(", "),
            placeholders(E::COLUMNS.len())
        );
        let result = record
            .bind_columns(sqlx::query(&sql))
            .execute(&self.pool)
            .await
            .map_err(|e| translate(e, &record))?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::SaveFailed { label: E::LABEL });
        }
        record.assign_id(result.last_insert_rowid());
        Ok(record)
    }

    async fn update(&self, record: E) -> Result<E, PersistenceError> {
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?",
            E::COLLECTION,
            assignments(E::COLUMNS)
        );
        let result = record
            .bind_columns(sqlx::query(&sql))
            .bind(record.id())
            .execute(&self.pool)
            .await
            .map_err(|e| translate(e, &record))?;

        if result.rows_affected() == 0 {
            // Distinguish a vanished row from a write that did nothing.
            self.get_by_id(record.id()).await?;
            return Err(PersistenceError::SaveFailed { label: E::LABEL });
        }
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<(), PersistenceError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::COLLECTION);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound { label: E::LABEL, id });
        }
        Ok(())
    }
}
