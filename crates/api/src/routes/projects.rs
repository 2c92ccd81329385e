//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Public routes mounted at `/projects`.
///
/// ```text
/// GET /          -> list_public
/// GET /{slug}    -> page_by_slug
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_public))
        .route("/{slug}", get(projects::page_by_slug))
}

/// Admin routes mounted at `/admin/projects`.
///
/// ```text
/// GET    /               -> list_all
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/detail    -> detail_get
/// PUT    /{id}/detail    -> detail_replace
/// DELETE /{id}/detail    -> detail_delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_all).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route(
            "/{id}/detail",
            get(projects::detail_get)
                .put(projects::detail_replace)
                .delete(projects::detail_delete),
        )
}
