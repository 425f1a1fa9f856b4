//! The bid entry form, minus any widgets
//!
//! Holds the raw text of the two input fields. A submit that stores the bid
//! clears them; one that is rejected leaves them as typed so they can be
//! corrected.
use crate::{
    bid::{Amount, Bid},
    controller::{BidController, ControllerError},
};
use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("not a number: {0}")]
    InvalidAmount(#[from] ParseFloatError),
    #[error(transparent)]
    Rejected(#[from] ControllerError),
}

impl FormError {
    /// What to show the person filling in the form
    pub fn user_message(&self) -> String {
        match self {
            FormError::InvalidAmount(_) => "Please enter a valid amount.".to_owned(),
            FormError::Rejected(ControllerError::Validation(_)) => "Invalid Bid!".to_owned(),
            FormError::Rejected(ControllerError::Persistence(e)) => {
                format!("Could not save bid: {e}")
            }
            FormError::Rejected(ControllerError::Listener(e)) => {
                format!("Bid saved but display failed: {e}")
            }
        }
    }

    /// The bid made it into the store even though the submit failed
    pub fn bid_was_stored(&self) -> bool {
        matches!(self, FormError::Rejected(ControllerError::Listener(_)))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BidForm {
    name: String,
    amount: String,
}

impl BidForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    /// Fields are cleared once the bid is stored, even if a listener then
    /// failed, so the same entry cannot be submitted twice by accident.
    pub fn submit(&mut self, controller: &BidController) -> Result<Bid, FormError> {
        let res = self.submit_inner(controller);
        match &res {
            Ok(_) => self.clear(),
            Err(e) if e.bid_was_stored() => self.clear(),
            Err(_) => {}
        }
        res
    }

    fn submit_inner(&self, controller: &BidController) -> Result<Bid, FormError> {
        let amount: Amount = self.amount.trim().parse()?;
        Ok(controller.submit(&self.name, amount)?)
    }

    fn clear(&mut self) {
        self.name.clear();
        self.amount.clear();
    }
}
