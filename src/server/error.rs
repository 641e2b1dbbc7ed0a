//! HTTP error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::lookup::LookupError;

/// Body of every error response.
#[derive(Serialize, ToSchema)]
#[schema(example = json!({"error": "Invalid expiration date format. Expected MM/YY"}))]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or wrong `x-api-key`.
    #[error("Unauthorized access, invalid API key")]
    Unauthorized,

    /// The request body is not the expected JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Card details failed a format or CVV gate.
    #[error(transparent)]
    Validation(#[from] crate::Error),

    /// The BIN lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ApiError {
    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidBody(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Lookup(LookupError::InvalidBin | LookupError::Upstream(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Lookup(LookupError::Request(_) | LookupError::Unavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
