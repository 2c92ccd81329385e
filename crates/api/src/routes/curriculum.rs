//! Route definitions for the id-scoped curriculum hierarchy.
//!
//! Month creation and listing live under the owning course in
//! `routes::courses`; everything addressed by its own id lives here.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::curriculum;
use crate::state::AppState;

/// Admin routes mounted at `/admin/curriculum`.
///
/// ```text
/// PUT    /months/{id}                    -> month_update
/// DELETE /months/{id}                    -> month_delete
///
/// GET    /months/{month_id}/sections     -> section_list
/// POST   /months/{month_id}/sections     -> section_create
/// PUT    /sections/{id}                  -> section_update
/// DELETE /sections/{id}                  -> section_delete
///
/// GET    /sections/{section_id}/topics   -> topic_list
/// POST   /sections/{section_id}/topics   -> topic_create
/// PUT    /topics/{id}                    -> topic_update
/// DELETE /topics/{id}                    -> topic_delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/months/{id}",
            put(curriculum::month_update).delete(curriculum::month_delete),
        )
        .route(
            "/months/{month_id}/sections",
            get(curriculum::section_list).post(curriculum::section_create),
        )
        .route(
            "/sections/{id}",
            put(curriculum::section_update).delete(curriculum::section_delete),
        )
        .route(
            "/sections/{section_id}/topics",
            get(curriculum::topic_list).post(curriculum::topic_create),
        )
        .route(
            "/topics/{id}",
            put(curriculum::topic_update).delete(curriculum::topic_delete),
        )
}
