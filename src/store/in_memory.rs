use super::*;
use parking_lot::Mutex;

/// Fake in-memory store.
///
/// Useful for unit-tests. Never fails.
#[derive(Debug, Default)]
pub struct InMemoryBidStore {
    bids: Mutex<Vec<Bid>>,
}

impl InMemoryBidStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> SharedBidStore {
        Arc::new(Self::new())
    }
}

impl BidStore for InMemoryBidStore {
    fn initialize(&self) -> Result<(), PersistenceError> {
        Ok(())
    }

    fn append(&self, bid: &Bid) -> Result<(), PersistenceError> {
        self.bids.lock().push(bid.clone());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Bid>, PersistenceError> {
        Ok(self.bids.lock().clone())
    }
}
