use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::upload_photo;

/// - `POST /` - multipart photo upload, JPEG/PNG only
pub fn photo_routes() -> Router<AppState> {
    Router::new().route("/", post(upload_photo))
}
