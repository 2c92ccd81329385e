//! Handlers for the `/courses` resource.
//!
//! Public endpoints serve active courses only; the admin endpoints
//! under `/admin/courses` manage the full set.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yume_core::error::CoreError;
use yume_core::types::DbId;
use yume_db::models::course::{Course, CourseDetail, CreateCourse, UpdateCourse};
use yume_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/courses
///
/// Active courses in display order, for the catalog page.
pub async fn list_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Course>>>> {
    let courses = CourseRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /api/v1/courses/{course_url}
///
/// The full detail page for an active course, including child
/// collections and the curriculum tree.
pub async fn detail_by_url(
    State(state): State<AppState>,
    Path(course_url): Path<String>,
) -> AppResult<Json<DataResponse<CourseDetail>>> {
    let detail = CourseRepo::detail_by_url(&state.pool, &course_url)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_key("Course", &course_url)))?;
    Ok(Json(DataResponse { data: detail }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/courses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    if input.course_url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "course_url must not be empty".into(),
        )));
    }
    let course = CourseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/admin/courses
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list_all(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /api/v1/admin/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Course", id)))?;
    Ok(Json(course))
}

/// PUT /api/v1/admin/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Course", id)))?;
    Ok(Json(course))
}

/// DELETE /api/v1/admin/courses/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Course", id)))
    }
}
