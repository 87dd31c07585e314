//! Connection pool for the SQLite backend.
//!
//! `main` opens one pool and every repository clones it. Reads run
//! concurrently under WAL; writers queue on SQLite's database lock, and the
//! busy timeout makes a queued writer wait instead of failing with
//! `SQLITE_BUSY`.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::persistence::PersistenceError;

/// Connections kept by a file-backed pool.
const POOL_SIZE: u32 = 8;

/// How long a writer waits for the database lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database file at `path`, creating it and its directory on
    /// first use, and bring the schema up to date.
    pub async fn open(path: &Path) -> Result<Self, PersistenceError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new().max_connections(POOL_SIZE);

        let db = Self::connect(pool, file).await?;
        tracing::info!(path = %path.display(), pool_size = POOL_SIZE, "SQLite database ready");
        Ok(db)
    }

    /// A private in-memory database with the schema applied.
    ///
    /// Each connection to `:memory:` sees its own empty database, so the pool
    /// holds exactly one connection and never retires it.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self, PersistenceError> {
        let memory = SqliteConnectOptions::new().in_memory(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
        Self::connect(pool, memory).await
    }

    async fn connect(
        pool: SqlitePoolOptions,
        options: SqliteConnectOptions,
    ) -> Result<Self, PersistenceError> {
        let pool = pool.connect_with(options).await?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| PersistenceError::Migration(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
