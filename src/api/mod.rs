//! HTTP surface: routing, shared state and middleware.
//!
//! ## Endpoints
//!
//! - `GET /api/v1/check-password/?password=...` - Score a password
//! - `GET /health` - Health check
//! - `GET /openapi.json` - OpenAPI document

mod docs;
mod handlers;

pub use docs::ApiDoc;
pub use handlers::{HealthResponse, handle_panic};

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::instrument::WithSubscriber;

use crate::telemetry::Telemetry;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    telemetry: Telemetry,
}

impl AppState {
    pub fn new(telemetry: Telemetry) -> Self {
        Self { telemetry }
    }
}

/// Builds the application router.
///
/// Every request runs under the injected [`Telemetry`] dispatcher, so request
/// tracing, handler logs and panic reports all go to the same subscriber.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/check-password/", get(handlers::check_password_strength))
        .route("/api/v1/check-password", get(handlers::check_password_strength))
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(docs::openapi_json))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(CorsLayer::very_permissive())
        .layer(middleware::from_fn_with_state(state.clone(), scoped_telemetry))
        .with_state(state)
}

// The query string carries the password; only the path is recorded.
fn request_span(request: &http::Request<Body>) -> tracing::Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path()
    )
}

async fn scoped_telemetry(State(state): State<AppState>, request: Request, next: Next) -> Response {
    next.run(request)
        .with_subscriber(state.telemetry.dispatch().clone())
        .await
}
