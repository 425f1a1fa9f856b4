use super::{shared, FlakyBidStore, RecordingListener};
use crate::{
    bid::Bid,
    controller::{BidController, ControllerError},
    form::{BidForm, FormError},
    store::{BidStore, InMemoryBidStore},
    validation::ValidationError,
};
use anyhow::{bail, Result};
use std::sync::Arc;

fn filled(name: &str, amount: &str) -> BidForm {
    let mut form = BidForm::new();
    form.set_name(name);
    form.set_amount(amount);
    form
}

#[test]
fn successful_submit_clears_the_form() -> Result<()> {
    let store = Arc::new(InMemoryBidStore::new());
    let controller = BidController::new(store.clone());
    let mut form = filled(" Bob ", " 25.5 ");

    assert_eq!(form.submit(&controller)?, Bid::new("Bob", 25.5));

    assert_eq!(form, BidForm::new());
    assert_eq!(store.list_all()?, vec![Bid::new("Bob", 25.5)]);
    Ok(())
}

#[test]
fn unparseable_amount_never_reaches_the_controller() -> Result<()> {
    let store = Arc::new(InMemoryBidStore::new());
    let listener = RecordingListener::new_shared();
    let mut controller = BidController::new(store.clone());
    controller.register_listener(shared(&listener));

    for amount in ["", "abc", "12,50", "$5"] {
        let mut form = filled("Alice", amount);
        let err = form.submit(&controller).unwrap_err();

        assert!(matches!(err, FormError::InvalidAmount(_)), "{amount:?}");
        assert_eq!(err.user_message(), "Please enter a valid amount.");
        assert_eq!(form, filled("Alice", amount));
    }

    assert_eq!(store.list_all()?, vec![]);
    assert_eq!(listener.seen(), vec![]);
    Ok(())
}

#[test]
fn rejected_bid_keeps_the_input() {
    let controller = BidController::new(InMemoryBidStore::new_shared());
    let mut form = filled("   ", "10");

    let err = form.submit(&controller).unwrap_err();

    assert!(matches!(
        err,
        FormError::Rejected(ControllerError::Validation(_))
    ));
    assert_eq!(err.user_message(), "Invalid Bid!");
    assert_eq!(form, filled("   ", "10"));
}

#[test]
fn storage_failure_keeps_the_input_and_says_so() {
    let store = FlakyBidStore::new_shared();
    store.set_failing(true);
    let controller = BidController::new(store);
    let mut form = filled("Alice", "50");

    let err = form.submit(&controller).unwrap_err();

    assert!(!err.bid_was_stored());
    assert_eq!(
        err.user_message(),
        "Could not save bid: storage unavailable: disk on fire"
    );
    assert_eq!(form, filled("Alice", "50"));
}

#[test]
fn non_finite_amounts_parse_but_are_invalid_bids() -> Result<()> {
    let store = Arc::new(InMemoryBidStore::new());
    let controller = BidController::new(store.clone());

    for amount in ["inf", "-inf", "NaN", "infinity"] {
        let mut form = filled("Alice", amount);
        let err = form.submit(&controller).unwrap_err();

        assert!(
            matches!(
                err,
                FormError::Rejected(ControllerError::Validation(
                    ValidationError::NonFiniteAmount
                ))
            ),
            "{amount:?}"
        );
        assert_eq!(err.user_message(), "Invalid Bid!");
        assert_eq!(form, filled("Alice", amount));
    }

    assert_eq!(store.list_all()?, vec![]);
    Ok(())
}

#[test]
fn display_failure_after_storing_clears_the_form() -> Result<()> {
    let store = Arc::new(InMemoryBidStore::new());
    let mut controller = BidController::new(store.clone());
    controller.register_listener(Arc::new(|_bid: &Bid| -> Result<()> {
        bail!("screen off")
    }));
    let mut form = filled("Alice", "50");

    let err = form.submit(&controller).unwrap_err();

    assert!(err.bid_was_stored());
    assert_eq!(err.user_message(), "Bid saved but display failed: screen off");
    assert_eq!(form, BidForm::new());
    assert_eq!(store.list_all()?, vec![Bid::new("Alice", 50.0)]);
    Ok(())
}
