//! Route definitions for admin media uploads.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Admin routes mounted at `/admin/uploads`.
///
/// ```text
/// POST /    -> upload (multipart, single `file` field)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", post(uploads::upload))
}
