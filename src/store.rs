mod in_memory;
mod sqlite;

pub use self::{in_memory::*, sqlite::*};

use crate::{bid::Bid, persistence::PersistenceError};
use std::sync::Arc;

/// A durable, append-only table of bids
///
/// The store trusts its caller: anything handed to `append` is written
/// as-is, validated or not.
pub trait BidStore {
    /// Prepare the underlying storage
    ///
    /// Safe to call on every start; an existing table and its rows are
    /// left alone.
    fn initialize(&self) -> Result<(), PersistenceError>;

    /// Write one bid after all the previously appended ones
    fn append(&self, bid: &Bid) -> Result<(), PersistenceError>;

    /// All stored bids, oldest first
    fn list_all(&self) -> Result<Vec<Bid>, PersistenceError>;
}

pub type SharedBidStore = Arc<dyn BidStore + Send + Sync + 'static>;
