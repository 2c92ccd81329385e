//! Route definitions for the `/internship` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::internship;
use crate::state::AppState;

/// Public routes mounted at `/internship`.
///
/// ```text
/// GET /    -> get_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(internship::get_public))
}

/// Admin routes mounted at `/admin/internship`.
///
/// ```text
/// GET    /                               -> get (the singleton)
/// POST   /                               -> create (409 when one exists)
/// PUT    /{id}                           -> update
/// DELETE /{id}                           -> delete
///
/// GET    /{section_id}/benefits          -> benefit_list
/// POST   /{section_id}/benefits          -> benefit_create
/// PUT    /{section_id}/benefits/{id}     -> benefit_update
/// DELETE /{section_id}/benefits/{id}     -> benefit_delete
/// ```
pub fn admin_router() -> Router<AppState> {
    let benefit_routes = Router::new()
        .route(
            "/",
            get(internship::benefit_list).post(internship::benefit_create),
        )
        .route(
            "/{id}",
            put(internship::benefit_update).delete(internship::benefit_delete),
        );

    Router::new()
        .route("/", get(internship::get).post(internship::create))
        .route(
            "/{id}",
            put(internship::update).delete(internship::delete),
        )
        .nest("/{section_id}/benefits", benefit_routes)
}
