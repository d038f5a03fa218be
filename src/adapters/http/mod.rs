//! HTTP adapter: routers, DTOs, and the error envelope.

pub mod auth;
pub mod error;
pub mod members;
pub mod photos;
pub mod state;

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

async fn health_check() -> &'static str {
    "ok"
}

/// Builds the full application router.
///
/// `request_timeout` comes from `ServerConfig.request_timeout_secs`.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/login", auth::auth_routes())
        .nest("/api/members", members::member_routes())
        .nest("/api/upload-photo", photos::photo_routes())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
