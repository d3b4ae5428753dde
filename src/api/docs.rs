//! OpenAPI document.

use axum::Json;
use utoipa::OpenApi;

use super::handlers::{self, HealthResponse};
use crate::error::ErrorResponse;
use crate::types::{Criteria, PasswordResponse, PasswordStrength};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::check_password_strength, handlers::health),
    components(schemas(
        PasswordResponse,
        PasswordStrength,
        Criteria,
        ErrorResponse,
        HealthResponse
    )),
    tags(
        (name = "password", description = "Password strength checking"),
        (name = "health", description = "Liveness probe")
    ),
    info(
        title = "Password Strength Checker API",
        version = "1.0.0",
        description = "An API to check password strength based on multiple criteria"
    )
)]
pub struct ApiDoc;

pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
