//! Bid acceptance rules
//!
//! A bidder name must have something left after trimming, and the amount
//! must be a finite number above zero. There is no upper bound and
//! repeated names are fine.
use crate::bid::{Amount, BidderNameRef};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum ValidationError {
    #[error("bidder name is blank")]
    BlankName,
    #[error("bid amount must be greater than zero, got {0}")]
    NonPositiveAmount(Amount),
    #[error("bid amount is not a finite number")]
    NonFiniteAmount,
}

/// Check a candidate bid, reporting the first rule it breaks
pub fn check(bidder_name: BidderNameRef, amount: Amount) -> Result<(), ValidationError> {
    if bidder_name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    if !amount.is_finite() {
        return Err(ValidationError::NonFiniteAmount);
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(())
}

pub fn is_valid(bidder_name: BidderNameRef, amount: Amount) -> bool {
    check(bidder_name, amount).is_ok()
}
