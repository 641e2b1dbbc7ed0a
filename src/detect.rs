//! Card network classification from prefix and length rules.
//!
//! Each network is a prefix pattern plus an exact total length. Rules are
//! checked in a fixed order and the first match wins:
//!
//! | Network | Prefix | Length |
//! |---------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | MasterCard | 51-55 | 16 |
//! | Discover | 6011, 65 | 16 |
//! | American Express | 34, 37 | 15 |
//! | Diners Club | 300-305, 36, 38 | 14 |
//! | JCB | 2131, 1800 | 15 |
//! | JCB | 35 | 16 |
//!
//! Anything else is `CardNetwork::Unknown`.

use crate::CardNetwork;

/// Classifies a sequence of digits (0-9) into a card network.
///
/// Pure and allocation-free. Numbers whose length does not fit the matching
/// prefix rule are `Unknown`.
///
/// # Example
///
/// ```
/// use cardgate::detect::classify;
/// use cardgate::CardNetwork;
///
/// let visa = [4, 8, 3, 4, 8, 5, 1, 0, 6, 2, 2, 8, 6, 9, 5, 6];
/// assert_eq!(classify(&visa), CardNetwork::Visa);
///
/// // Right prefix, wrong length
/// assert_eq!(classify(&visa[..15]), CardNetwork::Unknown);
/// ```
#[inline]
pub fn classify(digits: &[u8]) -> CardNetwork {
    // Order matters if rules ever overlap
    match (digits, digits.len()) {
        ([4, ..], 13 | 16) => CardNetwork::Visa,

        ([5, 1..=5, ..], 16) => CardNetwork::MasterCard,

        ([6, 0, 1, 1, ..], 16) | ([6, 5, ..], 16) => CardNetwork::Discover,

        ([3, 4 | 7, ..], 15) => CardNetwork::AmericanExpress,

        ([3, 0, 0..=5, ..], 14) | ([3, 6 | 8, ..], 14) => CardNetwork::DinersClub,

        ([2, 1, 3, 1, ..], 15) | ([1, 8, 0, 0, ..], 15) => CardNetwork::Jcb,
        ([3, 5, ..], 16) => CardNetwork::Jcb,

        _ => CardNetwork::Unknown,
    }
}

/// Classifies a card number string.
///
/// Returns `Unknown` for empty input or input containing anything other than
/// ASCII digits.
pub fn classify_str(input: &str) -> CardNetwork {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return CardNetwork::Unknown;
    }
    let digits: Vec<u8> = input.bytes().map(|b| b - b'0').collect();
    classify(&digits)
}
