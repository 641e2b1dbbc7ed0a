//! BIN lookup endpoint.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::{ApiError, ErrorResponse};
use super::AppState;
use crate::lookup::{is_valid_bin, BinDetails, LookupError};

/// Successful BIN lookup envelope.
#[derive(Serialize, ToSchema)]
pub struct BinLookupResponse {
    /// Always true
    pub success: bool,
    /// Always 200
    pub code: u16,
    /// Issuer details for the BIN
    #[serde(rename = "BIN")]
    pub bin: BinDetails,
}

/// Look up issuer details for a BIN
///
/// The BIN is the first 6 to 8 digits of a card number.
#[utoipa::path(
    get,
    path = "/api/v1/lookup/bin-lookup/{bin}",
    params(
        ("bin" = String, Path, description = "First 6-8 digits of the card number", example = "53319100"),
        ("x-api-key" = String, Header, description = "API key")
    ),
    responses(
        (status = 200, description = "Issuer details", body = BinLookupResponse),
        (status = 400, description = "Invalid BIN or upstream reported an error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    ),
    tag = "BIN Lookup"
)]
pub async fn bin_lookup_handler(
    State(state): State<AppState>,
    Path(bin): Path<String>,
) -> Result<Json<BinLookupResponse>, ApiError> {
    if !is_valid_bin(&bin) {
        return Err(LookupError::InvalidBin.into());
    }

    match state.lookup().lookup(&bin).await {
        Ok(details) => {
            tracing::info!(%bin, scheme = ?details.scheme, "BIN lookup succeeded");
            Ok(Json(BinLookupResponse {
                success: true,
                code: 200,
                bin: details,
            }))
        }
        Err(e) => {
            tracing::warn!(%bin, error = %e, "BIN lookup failed");
            Err(e.into())
        }
    }
}
