//! BIN (Bank Identification Number) lookup.
//!
//! Issuer and country metadata for a card prefix is owned by a third-party
//! service. This module defines the pluggable [`BinLookup`] interface, the
//! metadata types returned through it, and a RapidAPI-backed client.
//!
//! The lookup is the only I/O in the crate. It shares nothing with the
//! validation core and carries its own timeout and error type.
//!
//! # Example
//!
//! ```rust,ignore
//! use cardgate::lookup::{BinLookup, RapidApiBinLookup, RapidApiConfig};
//!
//! let client = RapidApiBinLookup::new(RapidApiConfig::default().api_key("..."))?;
//! let details = client.lookup("53319100").await?;
//! println!("Scheme: {:?}", details.scheme);
//! ```

mod rapidapi;

pub use rapidapi::{RapidApiBinLookup, RapidApiConfig};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shortest accepted BIN.
pub const MIN_BIN_DIGITS: usize = 6;

/// Longest accepted BIN.
pub const MAX_BIN_DIGITS: usize = 8;

/// Message used when the upstream answers without BIN data or an error.
pub const NO_DETAILS_MESSAGE: &str = "Unable to fetch BIN details.";

/// Returns true for 6 to 8 ASCII digits.
pub fn is_valid_bin(bin: &str) -> bool {
    (MIN_BIN_DIGITS..=MAX_BIN_DIGITS).contains(&bin.len()) && bin.bytes().all(|b| b.is_ascii_digit())
}

/// Source of issuer metadata for a BIN.
#[async_trait]
pub trait BinLookup: Send + Sync {
    /// Fetches metadata for a 6-8 digit BIN.
    async fn lookup(&self, bin: &str) -> Result<BinDetails, LookupError>;
}

/// Errors from a BIN lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The BIN is not 6-8 digits.
    #[error("Invalid BIN provided. Expected 6-8 digits")]
    InvalidBin,

    /// The request could not be completed (connect, timeout, non-2xx, bad body).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The lookup cannot be attempted with the current configuration.
    #[error("API request failed: {0}")]
    Unavailable(String),

    /// The upstream answered but did not return BIN data.
    #[error("{0}")]
    Upstream(String),
}

/// Issuer metadata for a BIN, as returned to API clients.
///
/// Fields the upstream omits are `null`, except the issuer website and phone
/// and the country flag, which default to an empty string.
///
/// Upstream typing is loose: strings, numbers and booleans are coerced to the
/// field's type where the meaning is unambiguous (`"false"`, `1`, `"8"`), and
/// anything else becomes `null` instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BinDetails {
    /// Whether the upstream recognizes the BIN.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub valid: Option<bool>,
    /// The BIN as echoed by the upstream.
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: Option<String>,
    /// Number of BIN digits.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub length: Option<u32>,
    /// Card scheme, e.g. "MasterCard".
    #[serde(default, deserialize_with = "lenient_string")]
    pub scheme: Option<String>,
    /// Product brand, e.g. "Debit".
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    /// Account type.
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    /// Card level, e.g. "Standard".
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: Option<String>,
    /// Whether the card is a commercial card.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_commercial: Option<bool>,
    /// Whether the card is prepaid.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_prepaid: Option<bool>,
    /// Card currency code.
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    /// Issuing institution.
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuer: Issuer,
    /// Issuing country.
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: Country,
}

/// Issuing institution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Issuer {
    /// Institution name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Institution website.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub website: String,
    /// Customer service phone number.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub phone: String,
}

/// Issuing country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Country {
    /// English name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// Native name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub native: Option<String>,
    /// Flag emoji.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub flag: String,
    /// ISO 3166-1 numeric code.
    #[serde(default, deserialize_with = "lenient_string")]
    pub numeric: Option<String>,
    /// Capital city.
    #[serde(default, deserialize_with = "lenient_string")]
    pub capital: Option<String>,
    /// Currency code.
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    /// Currency name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency_name: Option<String>,
    /// Currency symbol.
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency_symbol: Option<String>,
    /// Region.
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: Option<String>,
    /// Subregion.
    #[serde(default, deserialize_with = "lenient_string")]
    pub subregion: Option<String>,
    /// International dialing prefix.
    #[serde(default, deserialize_with = "lenient_string")]
    pub idd: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    #[serde(default, deserialize_with = "lenient_string")]
    pub alpha2: Option<String>,
    /// ISO 3166-1 alpha-3 code.
    #[serde(default, deserialize_with = "lenient_string")]
    pub alpha3: Option<String>,
    /// Main language.
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    /// Main language code.
    #[serde(default, deserialize_with = "lenient_string")]
    pub language_code: Option<String>,
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(Option::unwrap_or_default)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        Some(Value::Number(n)) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        _ => None,
    })
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
