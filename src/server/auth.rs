//! API-key gate for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;
use super::AppState;
use crate::mask::constant_time_eq_str;

/// Header carrying the client's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests whose `x-api-key` header does not match the configured key.
///
/// An empty key never matches, even if the configured key is empty.
///
/// Install with `axum::middleware::from_fn_with_state`.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|key| !key.is_empty())
        .is_some_and(|key| constant_time_eq_str(key, state.api_key()));

    if !authorized {
        tracing::warn!(
            path = %request.uri().path(),
            key_present = request.headers().contains_key(API_KEY_HEADER),
            "rejected request with invalid API key"
        );
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
