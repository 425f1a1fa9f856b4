//! Line-based bid entry
//!
//! Asks for a name and an amount, submits them through a [`BidForm`],
//! repeats until the input runs out. Pressing enter on an empty answer
//! keeps whatever the form still holds from a rejected attempt.
use crate::{controller::BidController, form::BidForm};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Run until end of input, returning how many bids were stored
pub fn run_session<R, W>(controller: &BidController, mut input: R, mut output: W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut form = BidForm::new();
    let mut accepted = 0;

    loop {
        let Some(name) = prompt(&mut input, &mut output, "Bidder Name", form.name())? else {
            break;
        };
        if !name.is_empty() {
            form.set_name(name);
        }

        let Some(amount) = prompt(&mut input, &mut output, "Bid Amount", form.amount())? else {
            break;
        };
        if !amount.is_empty() {
            form.set_amount(amount);
        }

        match form.submit(controller) {
            Ok(_) => accepted += 1,
            Err(e) => {
                if e.bid_was_stored() {
                    accepted += 1;
                }
                writeln!(output, "{}", e.user_message())?;
            }
        }
    }

    Ok(accepted)
}

/// `None` at end of input
fn prompt<R, W>(input: &mut R, output: &mut W, label: &str, current: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    if current.is_empty() {
        write!(output, "{label}: ")?;
    } else {
        write!(output, "{label} [{current}]: ")?;
    }
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}
