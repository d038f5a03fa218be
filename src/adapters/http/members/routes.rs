//! Router for member endpoints, mounted at `/api/members`.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{
    activate_pending, create_member, delete_member, edit_pending_period, export_members,
    extend_subscription, get_member, list_members, update_member,
};

/// - `POST /` - create member with initial active period
/// - `GET /` - list members, newest first
/// - `GET /export` - CSV download of the whole roster
/// - `GET /:id` - fetch one member (opportunistic pending activation)
/// - `PUT /:id` - partial profile/terms edit
/// - `DELETE /:id` - hard delete
/// - `POST /:id/extend` - renew (activate now or queue)
/// - `PATCH /:id/extend` - edit the queued period's terms
/// - `POST /:id/activate` - promote a due queued period
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_member).get(list_members))
        .route("/export", get(export_members))
        .route(
            "/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route(
            "/:id/extend",
            post(extend_subscription).patch(edit_pending_period),
        )
        .route("/:id/activate", post(activate_pending))
}
