//! Error types for card validation.
//!
//! Two kinds of failure stop validation before a verdict exists:
//!
//! - [`FormatError`] - the card number or expiration date is missing or malformed
//! - [`ValidationError`] - the CVV is missing or unacceptable for the card
//!
//! Everything past those gates is reported as `false` fields of a
//! [`ValidationVerdict`](crate::ValidationVerdict) instead of an error.

use std::fmt;

use crate::cvv::CvvError;

/// Malformed or missing card number / expiration date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No card number was provided.
    MissingCardNumber,

    /// The card number contains something other than ASCII digits.
    InvalidCardNumber {
        /// Character index of the offending character (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// No expiration date was provided.
    MissingExpiration,

    /// The expiration date is not in `MM/YY` form.
    InvalidExpiration,

    /// The expiration month is outside 01-12.
    ExpirationMonthOutOfRange(u8),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCardNumber => write!(f, "Invalid card number provided"),
            Self::InvalidCardNumber {
                position,
                character,
            } => write!(
                f,
                "Invalid card number provided: unexpected character '{}' at position {}",
                character.escape_default(),
                position
            ),
            Self::MissingExpiration => write!(f, "Expiration date is required"),
            Self::InvalidExpiration => {
                write!(f, "Invalid expiration date format. Expected MM/YY")
            }
            Self::ExpirationMonthOutOfRange(month) => write!(
                f,
                "Invalid expiration date format. Expected MM/YY (month {:02} is not 01-12)",
                month
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// A well-formed request whose CVV cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No CVV was provided.
    MissingCvv,
    /// The CVV failed the network-specific check.
    Cvv(CvvError),
}

impl ValidationError {
    /// Returns the underlying CVV failure, if any.
    pub fn cvv_error(&self) -> Option<&CvvError> {
        match self {
            Self::MissingCvv => None,
            Self::Cvv(e) => Some(e),
        }
    }
}

impl fmt::Display for ValidationError {
    // Reasons stay out of the message; see `cvv_error` for details
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid CVV provided for the given card type")
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingCvv => None,
            Self::Cvv(e) => Some(e),
        }
    }
}

/// Any error returned by [`validate_card`](crate::validate_card).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Card number or expiration date failed format checks.
    Format(FormatError),
    /// The CVV was rejected.
    Validation(ValidationError),
}

impl Error {
    /// Returns true for format failures.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(e) => write!(f, "{}", e),
            Self::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::Validation(e) => Some(e),
        }
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardNetwork;

    #[test]
    fn test_format_error_display() {
        assert_eq!(
            FormatError::MissingCardNumber.to_string(),
            "Invalid card number provided"
        );
        assert_eq!(
            FormatError::InvalidCardNumber {
                position: 3,
                character: 'a'
            }
            .to_string(),
            "Invalid card number provided: unexpected character 'a' at position 3"
        );
        assert_eq!(
            FormatError::MissingExpiration.to_string(),
            "Expiration date is required"
        );
        assert_eq!(
            FormatError::InvalidExpiration.to_string(),
            "Invalid expiration date format. Expected MM/YY"
        );
        assert!(FormatError::ExpirationMonthOutOfRange(13)
            .to_string()
            .contains("month 13"));
    }

    #[test]
    fn test_validation_error_hides_reason() {
        let err = ValidationError::Cvv(CvvError::WrongLengthForNetwork {
            network: CardNetwork::Visa,
            length: 4,
            expected: 3,
        });
        assert_eq!(
            err.to_string(),
            "Invalid CVV provided for the given card type"
        );
        assert!(err.cvv_error().is_some());
        assert!(ValidationError::MissingCvv.cvv_error().is_none());
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = FormatError::MissingExpiration.into();
        assert!(err.is_format());
        assert_eq!(err.to_string(), "Expiration date is required");

        let err: Error = ValidationError::MissingCvv.into();
        assert!(!err.is_format());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
        assert_send_sync::<FormatError>();
        assert_send_sync::<ValidationError>();
    }
}
