use std::fmt;

pub type BidderName = String;
pub type BidderNameRef<'s> = &'s str;
pub type Amount = f64;

/// One bidder's offer
///
/// Immutable once constructed. Whether it is acceptable is decided by
/// [`crate::validation`], not here.
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    bidder_name: BidderName,
    amount: Amount,
}

impl Bid {
    pub fn new(bidder_name: impl Into<BidderName>, amount: Amount) -> Self {
        Self {
            bidder_name: bidder_name.into(),
            amount,
        }
    }

    pub fn bidder_name(&self) -> BidderNameRef<'_> {
        &self.bidder_name
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// The display line, e.g. `Bob - $25.5`
///
/// `Debug` formatting keeps the trailing `.0` on whole amounts.
impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${:?}", self.bidder_name, self.amount)
    }
}
