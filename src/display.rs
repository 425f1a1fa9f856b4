//! Listeners that render accepted bids
use crate::{bid::Bid, controller::BidListener};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::io::Write;

/// Running list of display lines, one per accepted bid
#[derive(Debug, Default)]
pub struct BidDisplay {
    lines: Mutex<Vec<String>>,
}

impl BidDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// The whole display, every line newline-terminated
    pub fn text(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }
}

impl BidListener for BidDisplay {
    fn on_bid_placed(&self, bid: &Bid) -> Result<()> {
        self.lines.lock().push(bid.to_string());
        Ok(())
    }
}

/// Writes each accepted bid as a line, e.g. to stdout
pub struct LinePrinter<W> {
    out: Mutex<W>,
}

impl<W: Write> LinePrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> BidListener for LinePrinter<W> {
    fn on_bid_placed(&self, bid: &Bid) -> Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{bid}").context("writing bid line")?;
        out.flush().context("flushing bid line")?;
        Ok(())
    }
}
