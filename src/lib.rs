//! # cardgate
//!
//! Card data validation: network detection, Luhn checksum, expiration date
//! and CVV checks, with masking of sensitive fields.
//!
//! ## Features
//!
//! - Network detection (Visa, MasterCard, Discover, American Express, Diners Club, JCB)
//! - Luhn algorithm validation
//! - `MM/YY` expiration check against the current month
//! - Network-specific CVV length check
//! - Masked verdicts, safe to log and return to clients
//! - Optional BIN lookup client and REST API
//!
//! ## Quick Start
//!
//! ```rust
//! use cardgate::{validate_card, CardInput, CardNetwork};
//!
//! let verdict = validate_card(&CardInput::new("378282246310005", "12/68", "1234")).unwrap();
//! assert_eq!(verdict.network(), CardNetwork::AmericanExpress);
//! assert!(verdict.is_valid_luhn());
//! assert!(verdict.is_valid_cvv());
//!
//! // Safe for logging - never exposes full card number or CVV
//! assert_eq!(verdict.card_number(), "**** **** **** 0005");
//! assert_eq!(verdict.cvv(), "****");
//! ```
//!
//! ## Errors
//!
//! Malformed input is a [`FormatError`], a rejected CVV is a
//! [`ValidationError`]. Both come back wrapped in [`Error`]. A failed Luhn
//! or expiration check is not an error: it is a `false` field of the verdict.
//!
//! ```rust
//! use cardgate::{validate_card, CardInput, Error};
//!
//! let err = validate_card(&CardInput::new("123abc", "10/27", "123")).unwrap_err();
//! assert!(err.is_format());
//! assert_eq!(err.to_string(), "Invalid card number provided: unexpected character 'a' at position 3");
//!
//! // Visa takes a 3-digit CVV
//! let err = validate_card(&CardInput::new("4834851062286596", "10/27", "1234")).unwrap_err();
//! assert!(matches!(err, Error::Validation(_)));
//! ```
//!
//! ## Supported Networks
//!
//! | Network | Prefix | Length | CVV |
//! |---------|--------|--------|-----|
//! | Visa | 4 | 13, 16 | 3 |
//! | MasterCard | 51-55 | 16 | 3 |
//! | Discover | 6011, 65 | 16 | 3 |
//! | American Express | 34, 37 | 15 | 4 |
//! | Diners Club | 300-305, 36, 38 | 14 | none |
//! | JCB | 2131, 1800 / 35 | 15 / 16 | none |
//!
//! Diners Club and JCB have no CVV rule, so every CVV is rejected for them.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `lookup` | BIN lookup trait and RapidAPI client |
//! | `server` | REST API with Swagger UI (default) |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - `CardNumber` zeroizes its digits on drop
//! - `Debug` and `Display` show masked numbers only
//! - Constant-time comparison for API keys
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod cvv;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod luhn;
pub mod mask;
pub mod validate;

#[cfg(feature = "lookup")]
pub mod lookup;

#[cfg(feature = "server")]
pub mod server;

// Re-export main types at crate root
pub use card::{CardNetwork, CardNumber};
pub use cvv::validate_cvv;
pub use error::{Error, FormatError, ValidationError};
pub use expiry::{parse_expiration, ExpirationDate};
pub use validate::{
    is_valid, passes_luhn, validate_card, validate_card_at, CardInput, ValidationVerdict,
};
