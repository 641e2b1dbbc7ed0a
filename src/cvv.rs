//! CVV/CVC/CID validation conditioned on the card network.
//!
//! # Length Requirements
//!
//! - American Express: 4 digits
//! - Visa, MasterCard, Discover: 3 digits
//! - Diners Club, JCB, Unknown: no rule, always rejected
//!
//! # Example
//!
//! ```
//! use cardgate::cvv::validate_cvv;
//!
//! assert!(validate_cvv("340000000000009", "1234"));
//! assert!(validate_cvv("4834851062286956", "123"));
//! assert!(!validate_cvv("4834851062286956", "1234"));
//! ```

use std::fmt;

use crate::detect::classify_str;
use crate::CardNetwork;

/// Reasons a CVV is rejected.
///
/// Never carries the CVV value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvvError {
    /// The CVV is empty.
    Empty,
    /// The CVV contains a non-digit character.
    InvalidCharacter {
        /// Position of the invalid character.
        position: usize,
    },
    /// The CVV length doesn't match the network requirement.
    WrongLengthForNetwork {
        /// The card network.
        network: CardNetwork,
        /// Actual length provided.
        length: usize,
        /// Expected length for this network.
        expected: usize,
    },
    /// No CVV rule exists for this network.
    UnsupportedNetwork(CardNetwork),
}

impl fmt::Display for CvvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "CVV is empty"),
            Self::InvalidCharacter { position } => {
                write!(f, "CVV has a non-digit character at position {}", position)
            }
            Self::WrongLengthForNetwork {
                network,
                length,
                expected,
            } => write!(
                f,
                "{} cards require a {} digit CVV, got {}",
                network.name(),
                expected,
                length
            ),
            Self::UnsupportedNetwork(network) => {
                write!(f, "no CVV rule for {} cards", network.name())
            }
        }
    }
}

impl std::error::Error for CvvError {}

/// Returns the required CVV length for a network, if one is defined.
#[inline]
pub const fn required_cvv_length(network: CardNetwork) -> Option<usize> {
    match network {
        CardNetwork::AmericanExpress => Some(4),
        CardNetwork::Visa | CardNetwork::MasterCard | CardNetwork::Discover => Some(3),
        CardNetwork::DinersClub | CardNetwork::Jcb | CardNetwork::Unknown => None,
    }
}

/// Checks a CVV against the rule for `network`.
///
/// The digit check runs before the network lookup, so a malformed CVV is
/// reported as such even for unsupported networks.
pub fn check_cvv(network: CardNetwork, cvv: &str) -> Result<(), CvvError> {
    if cvv.is_empty() {
        return Err(CvvError::Empty);
    }

    if let Some(position) = cvv.chars().position(|c| !c.is_ascii_digit()) {
        return Err(CvvError::InvalidCharacter { position });
    }

    let expected = required_cvv_length(network).ok_or(CvvError::UnsupportedNetwork(network))?;
    let length = cvv.len();

    if length != expected {
        return Err(CvvError::WrongLengthForNetwork {
            network,
            length,
            expected,
        });
    }

    Ok(())
}

/// Returns true if `cvv` is acceptable for the card `card_number`.
///
/// The card is classified first; a card that cannot be classified never
/// accepts a CVV.
#[inline]
pub fn validate_cvv(card_number: &str, cvv: &str) -> bool {
    check_cvv(classify_str(card_number), cvv).is_ok()
}
