use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::login;

/// - `POST /` - exchange the admin password for a bearer token
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/", post(login))
}
