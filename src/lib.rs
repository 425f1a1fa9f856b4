//! Collect bids, validate them, keep them in a local SQLite table, and
//! tell whoever is listening (usually a display) about each accepted one.
pub mod bid;
pub mod config;
pub mod controller;
pub mod display;
pub mod form;
pub mod persistence;
pub mod session;
pub mod store;
pub mod validation;

pub use self::{
    bid::{Amount, Bid},
    controller::{BidController, BidListener, ControllerError, SharedBidListener},
    persistence::PersistenceError,
    store::{BidStore, SharedBidStore},
    validation::{is_valid, ValidationError},
};
