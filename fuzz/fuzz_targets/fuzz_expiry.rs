//! Fuzz target for expiration date parsing.
//!
//! Tests that parsing never panics on arbitrary input.

#![no_main]

use chrono::{TimeZone, Utc};
use libfuzzer_sys::fuzz_target;
use cardgate::parse_expiration;

fuzz_target!(|data: &str| {
    if let Ok(exp) = parse_expiration(data) {
        assert!((1..=12).contains(&exp.month()));
        assert_eq!(exp.to_string(), data);

        let _ = exp.is_valid();
        if let Some(epoch) = Utc.timestamp_opt(0, 0).single() {
            let _ = exp.is_valid_at(epoch);
        }
    }
});
