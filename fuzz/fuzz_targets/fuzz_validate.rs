//! Fuzz target for card validation.
//!
//! Tests that validate_card() never panics and never leaks the raw input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use cardgate::{is_valid, passes_luhn, validate_card, CardInput};

#[derive(Arbitrary, Debug)]
struct Fields<'a> {
    card_number: &'a str,
    expiration_date: &'a str,
    cvv: &'a str,
}

fuzz_target!(|fields: Fields<'_>| {
    let input = CardInput::new(fields.card_number, fields.expiration_date, fields.cvv);

    // These should never panic, regardless of input
    let _ = is_valid(&input);
    let _ = passes_luhn(fields.card_number);

    if let Ok(verdict) = validate_card(&input) {
        assert_eq!(verdict.cvv(), "****");
        assert!(verdict.card_number().starts_with("**** **** **** "));
        assert_eq!(
            verdict.is_valid(),
            verdict.is_valid_luhn() && verdict.is_valid_expiration() && verdict.is_valid_cvv()
        );
        let _ = format!("{:?}", verdict);
    }
});
