//! HTTP surface: card validation and BIN lookup behind an API-key gate.
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | `POST` | `/api/v1/card_validation/validate` | `x-api-key` |
//! | `GET`  | `/api/v1/lookup/bin-lookup/{bin}` | `x-api-key` |
//! | `GET`  | `/health` | none |
//! | `GET`  | `/apidocs` | none |
//!
//! The router is built by [`router`] so tests can drive it without binding
//! a socket.

pub mod auth;
pub mod bin_lookup;
pub mod config;
pub mod error;
pub mod validate;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::lookup::{BinDetails, BinLookup, Country, Issuer};

pub use config::ServerConfig;
pub use error::{ApiError, ErrorResponse};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    api_key: Arc<str>,
    lookup: Arc<dyn BinLookup>,
}

impl AppState {
    /// Creates state with the gate key and the BIN lookup backend.
    pub fn new(api_key: impl Into<Arc<str>>, lookup: Arc<dyn BinLookup>) -> Self {
        Self {
            api_key: api_key.into(),
            lookup,
        }
    }

    /// Key clients must present.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// BIN lookup backend.
    pub fn lookup(&self) -> &dyn BinLookup {
        self.lookup.as_ref()
    }
}

/// OpenAPI document served at `/apidocs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Validation API",
        version = "1.0.0",
        description = "Validates card number, expiration date and CVV, and looks up issuer details by BIN. Protected routes require the `x-api-key` header."
    ),
    tags(
        (name = "Credit Card Validation", description = "Card data validation"),
        (name = "BIN Lookup", description = "Issuer details by BIN"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(
        validate::validate_card_handler,
        bin_lookup::bin_lookup_handler,
        health,
    ),
    components(schemas(
        validate::ValidateRequest,
        validate::ValidateResponse,
        bin_lookup::BinLookupResponse,
        BinDetails,
        Issuer,
        Country,
        ErrorResponse,
        HealthResponse,
    ))
)]
pub struct ApiDoc;

/// Body of `GET /health`.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,
    /// Crate version
    pub version: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(auth::API_KEY_HEADER),
        ])
        .allow_origin(Any);

    let protected = Router::new()
        .route(
            "/api/v1/card_validation/validate",
            post(validate::validate_card_handler),
        )
        .route(
            "/api/v1/lookup/bin-lookup/:bin",
            get(bin_lookup::bin_lookup_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .merge(SwaggerUi::new("/apidocs").url("/apidocs/openapi.json", ApiDoc::openapi()))
        .merge(protected)
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
