//! Database persistence
//!
//! Bids live in a single SQLite file. Connections come from an `r2d2`
//! pool and are handed out per operation; a [`SqliteConnection`] returns
//! itself to the pool when dropped, whichever way the operation ends.
//!
//! Only one process-local writer is expected. If several processes open
//! the same file, SQLite's own file locking is all there is.
use r2d2_sqlite::{rusqlite, SqliteConnectionManager};
use std::{path::Path, time::Duration};
use thiserror::Error;

/// How long to wait for a connection before giving up on the store
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("could not get a storage connection: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("storage operation failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type SqlitePool = r2d2::Pool<SqliteConnectionManager>;
pub type SqliteConnection = r2d2::PooledConnection<SqliteConnectionManager>;

#[derive(Clone)]
pub struct SqlitePersistence {
    pool: SqlitePool,
}

impl SqlitePersistence {
    /// Open (creating if needed) the database file at `path`
    ///
    /// The directory holding it must already exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if !dir.is_dir() {
                return Err(PersistenceError::Unavailable(format!(
                    "no such directory: {}",
                    dir.display()
                )));
            }
        }
        Self::with_manager(SqliteConnectionManager::file(path))
    }

    /// A private database that lives as long as this persistence
    ///
    /// Each SQLite in-memory connection is its own database, so the pool
    /// is pinned to a single connection that is never recycled.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        Self::with_manager(SqliteConnectionManager::memory())
    }

    fn with_manager(manager: SqliteConnectionManager) -> Result<Self, PersistenceError> {
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(manager)?;
        Ok(Self { pool })
    }

    /// Get a connection to the store
    pub fn get_connection(&self) -> Result<SqliteConnection, PersistenceError> {
        Ok(self.pool.get()?)
    }
}
