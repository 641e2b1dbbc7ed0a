//! BIN lookup backed by the RapidAPI "BIN IP Checker" service.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;

use super::{is_valid_bin, BinDetails, BinLookup, LookupError, NO_DETAILS_MESSAGE};

/// Connection settings for [`RapidApiBinLookup`].
#[derive(Clone)]
pub struct RapidApiConfig {
    /// Endpoint receiving the lookup request.
    pub url: String,
    /// RapidAPI key sent as `x-rapidapi-key`. Lookups fail without it.
    pub api_key: Option<String>,
    /// Value of the `x-rapidapi-host` header.
    pub host: String,
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl RapidApiConfig {
    /// Default endpoint.
    pub const DEFAULT_URL: &'static str = "https://bin-ip-checker.p.rapidapi.com/";
    /// Default `x-rapidapi-host`.
    pub const DEFAULT_HOST: &'static str = "bin-ip-checker.p.rapidapi.com";
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Builder method to set the RapidAPI key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builder method to set the endpoint.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder method to set the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RapidApiConfig {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT_URL.to_string(),
            api_key: None,
            host: Self::DEFAULT_HOST.to_string(),
            content_type: "application/json".to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for RapidApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RapidApiConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .field("host", &self.host)
            .field("content_type", &self.content_type)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Upstream response envelope.
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "BIN")]
    bin: Option<BinDetails>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl Envelope {
    fn error_message(&self) -> String {
        match &self.error {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(serde_json::Value::Null) | None => NO_DETAILS_MESSAGE.to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// HTTP client for the RapidAPI BIN service.
///
/// Sends `POST <url>?bin=<bin>` with a `{"bin": "<bin>"}` body.
#[derive(Debug, Clone)]
pub struct RapidApiBinLookup {
    client: Client,
    config: RapidApiConfig,
}

impl RapidApiBinLookup {
    /// Builds a client with the configured timeout.
    pub fn new(config: RapidApiConfig) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &RapidApiConfig {
        &self.config
    }
}

#[async_trait]
impl BinLookup for RapidApiBinLookup {
    async fn lookup(&self, bin: &str) -> Result<BinDetails, LookupError> {
        if !is_valid_bin(bin) {
            return Err(LookupError::InvalidBin);
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| LookupError::Unavailable("RapidAPI key is not configured".into()))?;

        tracing::debug!(bin, url = %self.config.url, "requesting BIN details");

        let response = self
            .client
            .post(&self.config.url)
            .query(&[("bin", bin)])
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", &self.config.host)
            .header(CONTENT_TYPE, &self.config.content_type)
            .json(&serde_json::json!({ "bin": bin }))
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope = response.json().await?;
        match envelope.bin {
            Some(details) => Ok(details),
            None => Err(LookupError::Upstream(envelope.error_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RapidApiConfig::default();
        assert_eq!(config.url, "https://bin-ip-checker.p.rapidapi.com/");
        assert_eq!(config.host, "bin-ip-checker.p.rapidapi.com");
        assert_eq!(config.content_type, "application/json");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = RapidApiConfig::default().api_key("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_envelope_error_message() {
        let envelope: Envelope =
            serde_json::from_value(serde_json::json!({"error": "Invalid BIN"})).unwrap();
        assert!(envelope.bin.is_none());
        assert_eq!(envelope.error_message(), "Invalid BIN");

        let envelope: Envelope = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(envelope.error_message(), NO_DETAILS_MESSAGE);
    }

    #[tokio::test]
    async fn test_lookup_rejects_bad_bin_without_request() {
        let client = RapidApiBinLookup::new(RapidApiConfig::default().api_key("k")).unwrap();
        assert!(matches!(
            client.lookup("12345").await,
            Err(LookupError::InvalidBin)
        ));
    }

    #[tokio::test]
    async fn test_lookup_requires_api_key() {
        let client = RapidApiBinLookup::new(RapidApiConfig::default()).unwrap();
        assert!(matches!(
            client.lookup("53319100").await,
            Err(LookupError::Unavailable(_))
        ));
    }
}
