//! Fuzz target for CVV validation.
//!
//! Tests that CVV functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cardgate::cvv::{check_cvv, validate_cvv};
use cardgate::CardNetwork;

fuzz_target!(|data: (&str, &str)| {
    let (card_number, cvv) = data;

    // These should never panic
    let _ = validate_cvv(card_number, cvv);

    for network in CardNetwork::RECOGNIZED {
        if check_cvv(network, cvv).is_ok() {
            assert!(cvv.bytes().all(|b| b.is_ascii_digit()));
            assert!(cvv.len() == 3 || cvv.len() == 4);
        }
    }

    assert!(check_cvv(CardNetwork::Unknown, cvv).is_err());
});
