//! Server configuration from command-line flags and environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;

use crate::lookup::RapidApiConfig;

/// Startup configuration for `cardgate-server`.
///
/// Every flag can also be set through the environment variable shown in
/// `--help`.
#[derive(Parser, Clone)]
#[command(name = "cardgate-server", version, about = "Card validation REST API")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Key clients must send in the `x-api-key` header (must not be empty)
    #[arg(
        long,
        env = "API_KEY",
        hide_env_values = true,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub api_key: String,

    /// RapidAPI key for the BIN lookup service
    #[arg(long, env = "X_RAPIDAPI_KEY", hide_env_values = true)]
    pub rapidapi_key: Option<String>,

    /// RapidAPI host header for the BIN lookup service
    #[arg(long, env = "X_RAPIDAPI_HOST", default_value = RapidApiConfig::DEFAULT_HOST)]
    pub rapidapi_host: String,

    /// Content type sent to the BIN lookup service
    #[arg(long, env = "CONTENT_TYPE", default_value = "application/json")]
    pub content_type: String,

    /// BIN lookup endpoint
    #[arg(long, env = "BIN_LOOKUP_URL", default_value = RapidApiConfig::DEFAULT_URL)]
    pub lookup_url: String,

    /// BIN lookup request timeout in seconds
    #[arg(long, env = "BIN_LOOKUP_TIMEOUT_SECS", default_value_t = RapidApiConfig::DEFAULT_TIMEOUT_SECS)]
    pub lookup_timeout_secs: u64,
}

impl ServerConfig {
    /// Socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Settings for the BIN lookup client.
    pub fn lookup_config(&self) -> RapidApiConfig {
        RapidApiConfig {
            url: self.lookup_url.clone(),
            api_key: self.rapidapi_key.clone(),
            host: self.rapidapi_host.clone(),
            content_type: self.content_type.clone(),
            timeout: Duration::from_secs(self.lookup_timeout_secs),
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("addr", &self.socket_addr())
            .field("lookup", &self.lookup_config())
            .finish_non_exhaustive()
    }
}
