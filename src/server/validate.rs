//! Card validation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{ApiError, ErrorResponse};
use crate::{validate_card, CardInput, Error, ValidationVerdict};

/// Card details to validate.
///
/// Every field is optional at the JSON level so a missing field maps to the
/// matching validation error instead of a body rejection.
#[derive(Deserialize, ToSchema)]
#[schema(example = json!({
    "card_number": "4834851062286596",
    "expiration_date": "10/27",
    "cvv": "848"
}))]
pub struct ValidateRequest {
    /// Full card number, digits only (no spaces or dashes)
    #[serde(default)]
    pub card_number: Option<String>,
    /// Expiration date in MM/YY format
    #[serde(default)]
    pub expiration_date: Option<String>,
    /// Card verification value: 4 digits for American Express, 3 for Visa, MasterCard and Discover
    #[serde(default)]
    pub cvv: Option<String>,
}

/// Validation verdict, returned with 200 when every check passes and 400
/// otherwise.
#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "card_number": "**** **** **** 6596",
    "card_type": "Visa",
    "is_valid_luhn": true,
    "expiration_date": "10/27",
    "is_valid_expiration": true,
    "cvv": "****",
    "is_valid_cvv": true,
    "valid_card_data": true
}))]
pub struct ValidateResponse {
    /// Masked card number, only the last four digits are shown
    pub card_number: String,
    /// Detected network, null when no network rule matches
    pub card_type: Option<String>,
    /// Whether the number passes the Luhn checksum
    pub is_valid_luhn: bool,
    /// Expiration date as received
    pub expiration_date: String,
    /// Whether the expiration month starts in the future
    pub is_valid_expiration: bool,
    /// Always "****"
    pub cvv: String,
    /// Whether the CVV matches the network rule
    pub is_valid_cvv: bool,
    /// Luhn AND expiration AND CVV
    pub valid_card_data: bool,
}

impl From<&ValidationVerdict> for ValidateResponse {
    fn from(verdict: &ValidationVerdict) -> Self {
        let network = verdict.network();
        Self {
            card_number: verdict.card_number().to_string(),
            card_type: network.is_recognized().then(|| network.name().to_string()),
            is_valid_luhn: verdict.is_valid_luhn(),
            expiration_date: verdict.expiration_date().to_string(),
            is_valid_expiration: verdict.is_valid_expiration(),
            cvv: verdict.cvv().to_string(),
            is_valid_cvv: verdict.is_valid_cvv(),
            valid_card_data: verdict.is_valid(),
        }
    }
}

/// Validate card number, expiration date and CVV
///
/// Checks the number with the Luhn algorithm, the expiration date against the
/// current month and the CVV length against the card network. Sensitive
/// fields are masked in the response.
#[utoipa::path(
    post,
    path = "/api/v1/card_validation/validate",
    request_body = ValidateRequest,
    params(
        ("x-api-key" = String, Header, description = "API key")
    ),
    responses(
        (status = 200, description = "All checks passed", body = ValidateResponse),
        (status = 400, description = "Malformed input, rejected CVV, or failed checks (full verdict body)", body = ValidateResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    ),
    tag = "Credit Card Validation"
)]
pub async fn validate_card_handler(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ValidateResponse>), ApiError> {
    let Json(request) = payload?;

    let input = CardInput::new(
        request.card_number.as_deref().unwrap_or_default(),
        request.expiration_date.as_deref().unwrap_or_default(),
        request.cvv.as_deref().unwrap_or_default(),
    );

    let verdict = validate_card(&input).map_err(|e| {
        log_rejection(&e);
        ApiError::from(e)
    })?;

    tracing::info!(
        card_number = %verdict.card_number(),
        card_type = %verdict.network(),
        cvv = verdict.cvv(),
        expiration_date = %verdict.expiration_date(),
        is_valid_luhn = verdict.is_valid_luhn(),
        is_valid_expiration = verdict.is_valid_expiration(),
        is_valid_cvv = verdict.is_valid_cvv(),
        valid_card_data = verdict.is_valid(),
        "card validated"
    );

    let status = if verdict.is_valid() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    Ok((status, Json(ValidateResponse::from(&verdict))))
}

fn log_rejection(error: &Error) {
    match error {
        Error::Format(e) => tracing::info!(error = %e, "card details rejected"),
        Error::Validation(e) => {
            tracing::info!(error = %e, "card details rejected");
            if let Some(reason) = e.cvv_error() {
                tracing::debug!(%reason, "CVV rejection reason");
            }
        }
    }
}
