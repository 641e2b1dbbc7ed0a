//! REST API server for card validation and BIN lookup.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! API_KEY=secret cardgate-server
//!
//! # With custom port and a BIN lookup key
//! cardgate-server --port 8080 --api-key secret --rapidapi-key <key>
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/apidocs/ for interactive API documentation.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardgate::lookup::RapidApiBinLookup;
use cardgate::server::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    tracing::debug!(?config, "loaded configuration");

    if config.rapidapi_key.is_none() {
        tracing::warn!("X_RAPIDAPI_KEY is not set, BIN lookups will fail");
    }

    let lookup = RapidApiBinLookup::new(config.lookup_config())?;
    let app = router(AppState::new(config.api_key.as_str(), Arc::new(lookup)));

    let addr = config.socket_addr();
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/apidocs/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
