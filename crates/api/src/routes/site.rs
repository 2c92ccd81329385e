//! Route definitions for the standalone site sections: hero slides,
//! advisors, and the contact information block.

use axum::routing::get;
use axum::Router;

use crate::handlers::{advisors, contact_info, hero};
use crate::state::AppState;

/// Public routes mounted at `/hero-slides`.
///
/// ```text
/// GET /    -> list_public
/// ```
pub fn hero_public_router() -> Router<AppState> {
    Router::new().route("/", get(hero::list_public))
}

/// Admin routes mounted at `/admin/hero-slides`.
///
/// ```text
/// GET    /        -> list_all
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn hero_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(hero::list_all).post(hero::create))
        .route(
            "/{id}",
            get(hero::get_by_id).put(hero::update).delete(hero::delete),
        )
}

/// Public routes mounted at `/advisors`.
///
/// ```text
/// GET /    -> list_public (keyword-highlighted bios)
/// ```
pub fn advisors_public_router() -> Router<AppState> {
    Router::new().route("/", get(advisors::list_public))
}

/// Admin routes mounted at `/admin/advisors`.
///
/// ```text
/// GET    /        -> list_all
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn advisors_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(advisors::list_all).post(advisors::create))
        .route(
            "/{id}",
            get(advisors::get_by_id)
                .put(advisors::update)
                .delete(advisors::delete),
        )
}

/// Public routes mounted at `/contact-info`.
///
/// ```text
/// GET /    -> get_public
/// ```
pub fn contact_info_public_router() -> Router<AppState> {
    Router::new().route("/", get(contact_info::get_public))
}

/// Admin routes mounted at `/admin/contact-info`.
///
/// ```text
/// PUT /    -> upsert
/// ```
pub fn contact_info_admin_router() -> Router<AppState> {
    Router::new().route("/", axum::routing::put(contact_info::upsert))
}
