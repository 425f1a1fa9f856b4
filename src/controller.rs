//! Bid pipeline
//!
//! Every submission goes through the same steps: validate, store,
//! then tell the listeners. A listener only ever hears about a bid that
//! is already durably stored, and a failed step stops the pipeline right
//! there.
use crate::{
    bid::{Amount, Bid, BidderNameRef},
    persistence::PersistenceError,
    store::SharedBidStore,
    validation::{self, ValidationError},
};
use anyhow::Result;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Something that wants to know about accepted bids, like a display
pub trait BidListener {
    fn on_bid_placed(&self, bid: &Bid) -> Result<()>;
}

impl<F> BidListener for F
where
    F: Fn(&Bid) -> Result<()>,
{
    fn on_bid_placed(&self, bid: &Bid) -> Result<()> {
        self(bid)
    }
}

pub type SharedBidListener = Arc<dyn BidListener + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("invalid bid: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    /// The bid is stored; only the notification failed
    #[error("bid listener failed: {0}")]
    Listener(#[source] anyhow::Error),
}

pub struct BidController {
    store: SharedBidStore,
    listeners: Vec<SharedBidListener>,
}

impl BidController {
    pub fn new(store: SharedBidStore) -> Self {
        Self {
            store,
            listeners: vec![],
        }
    }

    /// Listeners are called in the order they were registered
    pub fn register_listener(&mut self, listener: SharedBidListener) {
        self.listeners.push(listener);
    }

    pub fn submit(
        &self,
        raw_name: BidderNameRef,
        raw_amount: Amount,
    ) -> Result<Bid, ControllerError> {
        let bid = Bid::new(raw_name.trim(), raw_amount);

        if let Err(e) = validation::check(bid.bidder_name(), bid.amount()) {
            warn!(%e, name = raw_name, amount = raw_amount, "bid rejected");
            return Err(e.into());
        }

        if let Err(e) = self.store.append(&bid) {
            warn!(%e, %bid, "could not store bid");
            return Err(e.into());
        }
        info!(%bid, "bid placed");

        self.notify(&bid)?;
        Ok(bid)
    }

    /// Push every stored bid through the listeners, oldest first
    ///
    /// Meant for populating a fresh display at startup. Stored bids are
    /// trusted and not validated again. Returns how many were replayed.
    pub fn replay_all(&self) -> Result<usize, ControllerError> {
        let bids = self.store.list_all().map_err(|e| {
            warn!(%e, "could not load stored bids");
            e
        })?;

        for bid in &bids {
            self.notify(bid)?;
        }
        debug!(count = bids.len(), "stored bids replayed");
        Ok(bids.len())
    }

    fn notify(&self, bid: &Bid) -> Result<(), ControllerError> {
        for listener in &self.listeners {
            listener.on_bid_placed(bid).map_err(|e| {
                warn!(%e, %bid, "bid listener failed");
                ControllerError::Listener(e)
            })?;
        }
        Ok(())
    }
}
