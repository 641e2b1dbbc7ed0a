//! Fuzz target for masking.
//!
//! Tests that masking never panics and keeps only the trailing characters.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cardgate::mask;

fuzz_target!(|data: &str| {
    let masked = mask::mask_card_number(data);
    assert!(masked.starts_with(mask::CARD_MASK_PREFIX));

    let tail = &masked[mask::CARD_MASK_PREFIX.len()..];
    assert!(tail.chars().count() <= 4);
    assert!(data.ends_with(tail));

    assert_eq!(mask::mask_cvv(data), "****");
});
