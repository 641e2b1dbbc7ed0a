//! Validation orchestration.
//!
//! [`validate_card`] runs the gates and checks in a fixed order:
//!
//! 1. Card number present and digits only, else `FormatError`
//! 2. Expiration date present, else `FormatError`
//! 3. Expiration date parses as `MM/YY`, else `FormatError`
//! 4. CVV present and acceptable for the card network, else `ValidationError`
//! 5. Network classification and Luhn checksum
//! 6. Verdict assembly with masked card number and CVV
//!
//! Past step 4 nothing is an error: a failed check shows up as a `false`
//! field of the returned [`ValidationVerdict`].

use chrono::{DateTime, Utc};

use crate::card::{CardNetwork, CardNumber};
use crate::cvv::check_cvv;
use crate::error::{Error, ValidationError};
use crate::expiry::parse_expiration;
use crate::mask::MASKED_CVV;

/// Raw card details as received from a caller.
///
/// An empty string means the field was not provided.
#[derive(Clone, Copy, Default)]
pub struct CardInput<'a> {
    /// Card number, digits only.
    pub card_number: &'a str,
    /// Expiration date, `MM/YY`.
    pub expiration_date: &'a str,
    /// Card verification value.
    pub cvv: &'a str,
}

impl<'a> CardInput<'a> {
    /// Bundles the three raw fields.
    pub fn new(card_number: &'a str, expiration_date: &'a str, cvv: &'a str) -> Self {
        Self {
            card_number,
            expiration_date,
            cvv,
        }
    }
}

impl std::fmt::Debug for CardInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardInput")
            .field("card_number", &crate::mask::mask_card_number(self.card_number))
            .field("expiration_date", &self.expiration_date)
            .field("cvv", &MASKED_CVV)
            .finish()
    }
}

/// Outcome of a completed validation.
///
/// Contains no sensitive data: the card number is masked and the CVV is
/// always `****`, so the verdict is safe to log and return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    card_number: String,
    network: CardNetwork,
    luhn_valid: bool,
    expiration_date: String,
    expiration_valid: bool,
    cvv_valid: bool,
}

impl ValidationVerdict {
    /// Masked card number, e.g. `**** **** **** 6956`.
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Detected card network.
    #[inline]
    pub const fn network(&self) -> CardNetwork {
        self.network
    }

    /// Whether the card number passes the Luhn checksum.
    #[inline]
    pub const fn is_valid_luhn(&self) -> bool {
        self.luhn_valid
    }

    /// The expiration date exactly as received.
    #[inline]
    pub fn expiration_date(&self) -> &str {
        &self.expiration_date
    }

    /// Whether the expiration month starts after the validation instant.
    #[inline]
    pub const fn is_valid_expiration(&self) -> bool {
        self.expiration_valid
    }

    /// Always `****`.
    #[inline]
    pub const fn cvv(&self) -> &'static str {
        MASKED_CVV
    }

    /// Whether the CVV matched the network rule.
    #[inline]
    pub const fn is_valid_cvv(&self) -> bool {
        self.cvv_valid
    }

    /// Luhn AND expiration AND CVV.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.luhn_valid && self.expiration_valid && self.cvv_valid
    }
}

/// Validates card details against the current time.
///
/// # Example
///
/// ```
/// use cardgate::{validate_card, CardInput, CardNetwork};
///
/// let verdict = validate_card(&CardInput::new("4834851062286596", "10/99", "123")).unwrap();
/// assert_eq!(verdict.network(), CardNetwork::Visa);
/// assert_eq!(verdict.card_number(), "**** **** **** 6596");
/// assert_eq!(verdict.cvv(), "****");
/// // 10/99 is October 1999
/// assert!(!verdict.is_valid_expiration());
/// assert!(!verdict.is_valid());
///
/// assert!(validate_card(&CardInput::new("123abc", "10/27", "123")).is_err());
/// ```
pub fn validate_card(input: &CardInput<'_>) -> Result<ValidationVerdict, Error> {
    validate_card_at(input, Utc::now())
}

/// Validates card details, judging the expiration against `now`.
pub fn validate_card_at(
    input: &CardInput<'_>,
    now: DateTime<Utc>,
) -> Result<ValidationVerdict, Error> {
    let card = CardNumber::parse(input.card_number)?;
    let expiration = parse_expiration(input.expiration_date)?;

    if input.cvv.is_empty() {
        return Err(ValidationError::MissingCvv.into());
    }
    let network = card.network();
    check_cvv(network, input.cvv).map_err(ValidationError::Cvv)?;

    Ok(ValidationVerdict {
        card_number: card.masked(),
        network,
        luhn_valid: card.passes_luhn(),
        expiration_date: input.expiration_date.to_string(),
        expiration_valid: expiration.is_valid_at(now),
        cvv_valid: true,
    })
}

/// Returns true if the string is all ASCII digits and passes the Luhn checksum.
///
/// # Example
///
/// ```
/// use cardgate::passes_luhn;
///
/// assert!(passes_luhn("4834851062286596"));
/// assert!(!passes_luhn("4834851062286956"));
/// assert!(!passes_luhn("4834-8510"));
/// ```
pub fn passes_luhn(input: &str) -> bool {
    CardNumber::parse(input)
        .map(|card| card.passes_luhn())
        .unwrap_or(false)
}

/// Returns true if the details validate and every check in the verdict passes.
pub fn is_valid(input: &CardInput<'_>) -> bool {
    validate_card(input)
        .map(|verdict| verdict.is_valid())
        .unwrap_or(false)
}
