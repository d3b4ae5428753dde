//! Request handlers.

use std::any::Any;

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorResponse};
use crate::types::PasswordResponse;
use crate::validation::{ValidationError, validate_password};

/// Raw query pairs, in order. Not logged: they hold the raw password.
type QueryPairs = Vec<(String, String)>;

/// Picks the `password` value; when the key repeats, the last one wins.
fn password_param(pairs: QueryPairs) -> Option<String> {
    pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == "password")
        .map(|(_, value)| value)
}

/// Response body for /health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

/// Check the strength of a password against five criteria:
/// minimum length of 8 characters, at least one digit, one uppercase letter,
/// one lowercase letter and one special character.
#[utoipa::path(
    get,
    path = "/api/v1/check-password/",
    tag = "password",
    params(
        ("password" = String, Query, description = "Password to check strength (1-100 characters)")
    ),
    responses(
        (status = 200, description = "Strength label and per-criterion details", body = PasswordResponse),
        (status = 422, description = "Missing, out of range or blank password", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub(crate) async fn check_password_strength(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<PasswordResponse>, ApiError> {
    let Query(pairs) = query.map_err(|_| ValidationError::Malformed)?;

    let password = validate_password(password_param(pairs)).inspect_err(|e| {
        debug!(code = e.code(), "Rejected password strength check request");
    })?;

    info!("Processing password strength check request");
    let response = crate::check_password(&password);
    info!(strength = %response.strength, "Password strength check completed");

    Ok(Json(response))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Converts a handler panic into a generic 500 response.
///
/// The panic payload is not logged: it may carry request data.
pub fn handle_panic(_payload: Box<dyn Any + Send + 'static>) -> Response {
    error!("Error processing password strength check: handler panicked");
    ApiError::Internal.into_response()
}
