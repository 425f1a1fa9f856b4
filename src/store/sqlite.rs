use super::*;
use crate::persistence::SqlitePersistence;
use r2d2_sqlite::rusqlite::params;
use std::path::Path;
use tracing::debug;

const CREATE_BIDS_TABLE: &str = "CREATE TABLE IF NOT EXISTS bids (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    bidderName TEXT NOT NULL,
    amount REAL NOT NULL
)";

#[derive(Clone)]
pub struct SqliteBidStore {
    persistence: SqlitePersistence,
}

impl SqliteBidStore {
    pub fn new(persistence: SqlitePersistence) -> Self {
        Self { persistence }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening bid store");
        Ok(Self::new(SqlitePersistence::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        Ok(Self::new(SqlitePersistence::open_in_memory()?))
    }
}

impl BidStore for SqliteBidStore {
    fn initialize(&self) -> Result<(), PersistenceError> {
        let conn = self.persistence.get_connection()?;
        conn.execute_batch(CREATE_BIDS_TABLE)?;
        Ok(())
    }

    fn append(&self, bid: &Bid) -> Result<(), PersistenceError> {
        let conn = self.persistence.get_connection()?;
        conn.execute(
            "INSERT INTO bids (bidderName, amount) VALUES (?1, ?2)",
            params![bid.bidder_name(), bid.amount()],
        )?;
        debug!(id = conn.last_insert_rowid(), %bid, "bid stored");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Bid>, PersistenceError> {
        let conn = self.persistence.get_connection()?;
        let mut stmt = conn.prepare("SELECT bidderName, amount FROM bids ORDER BY id")?;
        let bids = stmt
            .query_map([], |row| Ok(Bid::new(row.get::<_, String>(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = bids.len(), "bids loaded");
        Ok(bids)
    }
}
