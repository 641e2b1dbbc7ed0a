//! Core card types.
//!
//! This module provides the `CardNetwork` enum for identifying card schemes
//! and the `CardNumber` struct for holding raw card digits securely for the
//! lifetime of a single request.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::FormatError;

/// Card networks recognized by the classifier.
///
/// `Unknown` is returned for any number that matches none of the prefix and
/// length rules. A network is always derived from a `CardNumber`, never
/// stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardNetwork {
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// MasterCard - Prefix 51-55, length 16
    MasterCard,
    /// Discover - Prefix 6011, 65, length 16
    Discover,
    /// American Express - Prefix 34, 37, length 15
    AmericanExpress,
    /// Diners Club - Prefix 300-305, 36, 38, length 14
    DinersClub,
    /// JCB - Prefix 2131, 1800 (length 15) or 35 (length 16)
    Jcb,
    /// No rule matched.
    Unknown,
}

impl CardNetwork {
    /// All recognized networks, in classification order.
    pub const RECOGNIZED: [CardNetwork; 6] = [
        Self::Visa,
        Self::MasterCard,
        Self::Discover,
        Self::AmericanExpress,
        Self::DinersClub,
        Self::Jcb,
    ];

    /// Returns the display name used in API responses.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Discover => "Discover",
            Self::AmericanExpress => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns false only for `Unknown`.
    #[inline]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Longest BIN prefix exposed by `CardNumber::bin`.
pub const MAX_BIN_DIGITS: usize = 8;

/// A card number that has passed format checks (non-empty, ASCII digits only).
///
/// No length is enforced here; the classifier reports non-matching lengths as
/// `CardNetwork::Unknown`.
///
/// # Security
///
/// - Digits are private and zeroed on drop
/// - `Debug` and `Display` print only the masked form
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CardNumber {
    digits: Vec<u8>,
}

impl CardNumber {
    /// Parses a raw card number.
    ///
    /// Separators are not accepted: the input must consist of ASCII digits
    /// only.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgate::{CardNumber, CardNetwork};
    ///
    /// let card = CardNumber::parse("4834851062286956").unwrap();
    /// assert_eq!(card.network(), CardNetwork::Visa);
    /// assert_eq!(card.masked(), "**** **** **** 6956");
    ///
    /// assert!(CardNumber::parse("4834-8510").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        if input.is_empty() {
            return Err(FormatError::MissingCardNumber);
        }

        let mut digits = Vec::with_capacity(input.len());
        for (position, character) in input.chars().enumerate() {
            if !character.is_ascii_digit() {
                digits.zeroize();
                return Err(FormatError::InvalidCardNumber {
                    position,
                    character,
                });
            }
            digits.push(character as u8 - b'0');
        }

        Ok(Self { digits })
    }

    /// Returns the digits (0-9) of the card number.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: parsing rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the last four digits (all digits when shorter).
    pub fn last_four(&self) -> String {
        let start = self.digits.len().saturating_sub(4);
        to_string(&self.digits[start..])
    }

    /// Returns the leading `length` digits, capped at 8 and at the card length.
    pub fn bin(&self, length: usize) -> String {
        let len = length.min(MAX_BIN_DIGITS).min(self.digits.len());
        to_string(&self.digits[..len])
    }

    /// Classifies the number into a card network.
    #[inline]
    pub fn network(&self) -> CardNetwork {
        crate::detect::classify(&self.digits)
    }

    /// Returns true if the number passes the Luhn checksum.
    #[inline]
    pub fn passes_luhn(&self) -> bool {
        crate::luhn::validate(&self.digits)
    }

    /// Returns the display-safe form, e.g. `**** **** **** 6956`.
    pub fn masked(&self) -> String {
        crate::mask::mask_card_number(&self.last_four())
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("number", &self.masked())
            .field("length", &self.digits.len())
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}
