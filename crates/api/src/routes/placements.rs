//! Route definitions for the `/placements` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::placements;
use crate::state::AppState;

/// Public routes mounted at `/placements`.
///
/// ```text
/// GET /    -> list_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(placements::list_public))
}

/// Admin routes mounted at `/admin/placements`.
///
/// ```text
/// GET    /                                -> list_all
/// POST   /                                -> create
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete
///
/// GET    /{section_id}/logos              -> logo_list
/// POST   /{section_id}/logos              -> logo_create
/// PUT    /{section_id}/logos/{id}         -> logo_update
/// DELETE /{section_id}/logos/{id}         -> logo_delete
///
/// GET    /{section_id}/many-more          -> many_more_get
/// PUT    /{section_id}/many-more          -> many_more_upsert
/// DELETE /{section_id}/many-more          -> many_more_delete
/// ```
pub fn admin_router() -> Router<AppState> {
    let logo_routes = Router::new()
        .route(
            "/",
            get(placements::logo_list).post(placements::logo_create),
        )
        .route(
            "/{id}",
            put(placements::logo_update).delete(placements::logo_delete),
        );

    Router::new()
        .route("/", get(placements::list_all).post(placements::create))
        .route(
            "/{id}",
            get(placements::get_by_id)
                .put(placements::update)
                .delete(placements::delete),
        )
        .nest("/{section_id}/logos", logo_routes)
        .route(
            "/{section_id}/many-more",
            get(placements::many_more_get)
                .put(placements::many_more_upsert)
                .delete(placements::many_more_delete),
        )
}
