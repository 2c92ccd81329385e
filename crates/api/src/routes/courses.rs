//! Route definitions for the `/courses` resource.
//!
//! The admin router also nests the per-course child collections and
//! curriculum months under `/admin/courses/{course_id}/...`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{course_content, courses, curriculum};
use crate::state::AppState;

/// Public routes mounted at `/courses`.
///
/// ```text
/// GET /               -> list_public
/// GET /{course_url}   -> detail_by_url
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list_public))
        .route("/{course_url}", get(courses::detail_by_url))
}

/// Admin routes mounted at `/admin/courses`.
///
/// ```text
/// GET    /                                          -> list_all
/// POST   /                                          -> create
/// GET    /{id}                                      -> get_by_id
/// PUT    /{id}                                      -> update
/// DELETE /{id}                                      -> delete
///
/// GET    /{course_id}/highlights                    -> highlight_list
/// POST   /{course_id}/highlights                    -> highlight_create
/// PUT    /{course_id}/highlights/{id}               -> highlight_update
/// DELETE /{course_id}/highlights/{id}               -> highlight_delete
///
/// GET    /{course_id}/learning-outcomes             -> outcome_list
/// POST   /{course_id}/learning-outcomes             -> outcome_create
/// PUT    /{course_id}/learning-outcomes/{id}        -> outcome_update
/// DELETE /{course_id}/learning-outcomes/{id}        -> outcome_delete
///
/// GET    /{course_id}/tools                         -> tool_list
/// POST   /{course_id}/tools                         -> tool_create
/// PUT    /{course_id}/tools/{id}                    -> tool_update
/// DELETE /{course_id}/tools/{id}                    -> tool_delete
///
/// GET    /{course_id}/certification-points          -> point_list
/// POST   /{course_id}/certification-points          -> point_create
/// PUT    /{course_id}/certification-points/{id}     -> point_update
/// DELETE /{course_id}/certification-points/{id}     -> point_delete
///
/// GET    /{course_id}/faqs                          -> faq_list
/// POST   /{course_id}/faqs                          -> faq_create
/// PUT    /{course_id}/faqs/{id}                     -> faq_update
/// DELETE /{course_id}/faqs/{id}                     -> faq_delete
///
/// GET    /{course_id}/career-opportunities          -> career_list
/// POST   /{course_id}/career-opportunities          -> career_create
/// PUT    /{course_id}/career-opportunities/{id}     -> career_update
/// DELETE /{course_id}/career-opportunities/{id}     -> career_delete
///
/// GET    /{course_id}/curriculum/months             -> month_list
/// POST   /{course_id}/curriculum/months             -> month_create
/// ```
pub fn admin_router() -> Router<AppState> {
    let highlight_routes = Router::new()
        .route(
            "/",
            get(course_content::highlight_list).post(course_content::highlight_create),
        )
        .route(
            "/{id}",
            put(course_content::highlight_update).delete(course_content::highlight_delete),
        );

    let outcome_routes = Router::new()
        .route(
            "/",
            get(course_content::outcome_list).post(course_content::outcome_create),
        )
        .route(
            "/{id}",
            put(course_content::outcome_update).delete(course_content::outcome_delete),
        );

    let tool_routes = Router::new()
        .route(
            "/",
            get(course_content::tool_list).post(course_content::tool_create),
        )
        .route(
            "/{id}",
            put(course_content::tool_update).delete(course_content::tool_delete),
        );

    let point_routes = Router::new()
        .route(
            "/",
            get(course_content::point_list).post(course_content::point_create),
        )
        .route(
            "/{id}",
            put(course_content::point_update).delete(course_content::point_delete),
        );

    let faq_routes = Router::new()
        .route(
            "/",
            get(course_content::faq_list).post(course_content::faq_create),
        )
        .route(
            "/{id}",
            put(course_content::faq_update).delete(course_content::faq_delete),
        );

    let career_routes = Router::new()
        .route(
            "/",
            get(course_content::career_list).post(course_content::career_create),
        )
        .route(
            "/{id}",
            put(course_content::career_update).delete(course_content::career_delete),
        );

    let month_routes = Router::new().route(
        "/",
        get(curriculum::month_list).post(curriculum::month_create),
    );

    Router::new()
        .route("/", get(courses::list_all).post(courses::create))
        .route(
            "/{id}",
            get(courses::get_by_id)
                .put(courses::update)
                .delete(courses::delete),
        )
        .nest("/{course_id}/highlights", highlight_routes)
        .nest("/{course_id}/learning-outcomes", outcome_routes)
        .nest("/{course_id}/tools", tool_routes)
        .nest("/{course_id}/certification-points", point_routes)
        .nest("/{course_id}/faqs", faq_routes)
        .nest("/{course_id}/career-opportunities", career_routes)
        .nest("/{course_id}/curriculum/months", month_routes)
}
