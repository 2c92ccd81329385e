//! Admin handlers for the curriculum hierarchy.
//!
//! Months are nested under courses; sections and topics hang off their
//! parents and resolve the denormalized `course_id` automatically when
//! the payload omits it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yume_core::error::CoreError;
use yume_core::types::DbId;
use yume_db::models::curriculum::{
    CreateCurriculumMonth, CreateCurriculumSection, CreateCurriculumTopic, CurriculumMonth,
    CurriculumSection, CurriculumTopic, UpdateCurriculumMonth, UpdateCurriculumSection,
    UpdateCurriculumTopic,
};
use yume_db::repositories::{CurriculumMonthRepo, CurriculumSectionRepo, CurriculumTopicRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Months
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/courses/{course_id}/curriculum/months
pub async fn month_create(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(mut input): Json<CreateCurriculumMonth>,
) -> AppResult<(StatusCode, Json<CurriculumMonth>)> {
    input.course_id = course_id;
    let month = CurriculumMonthRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(month)))
}

/// GET /api/v1/admin/courses/{course_id}/curriculum/months
pub async fn month_list(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<CurriculumMonth>>> {
    let months = CurriculumMonthRepo::list(&state.pool, course_id).await?;
    Ok(Json(months))
}

/// PUT /api/v1/admin/curriculum/months/{id}
pub async fn month_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCurriculumMonth>,
) -> AppResult<Json<CurriculumMonth>> {
    let month = CurriculumMonthRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CurriculumMonth", id)))?;
    Ok(Json(month))
}

/// DELETE /api/v1/admin/curriculum/months/{id}
pub async fn month_delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CurriculumMonthRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("CurriculumMonth", id)))
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/curriculum/months/{month_id}/sections
pub async fn section_create(
    State(state): State<AppState>,
    Path(month_id): Path<DbId>,
    Json(mut input): Json<CreateCurriculumSection>,
) -> AppResult<(StatusCode, Json<CurriculumSection>)> {
    if CurriculumMonthRepo::find(&state.pool, month_id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found(
            "CurriculumMonth",
            month_id,
        )));
    }
    input.month_id = month_id;
    let section = CurriculumSectionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// GET /api/v1/admin/curriculum/months/{month_id}/sections
pub async fn section_list(
    State(state): State<AppState>,
    Path(month_id): Path<DbId>,
) -> AppResult<Json<Vec<CurriculumSection>>> {
    let sections = CurriculumSectionRepo::list_for_month(&state.pool, month_id).await?;
    Ok(Json(sections))
}

/// PUT /api/v1/admin/curriculum/sections/{id}
pub async fn section_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCurriculumSection>,
) -> AppResult<Json<CurriculumSection>> {
    let section = CurriculumSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CurriculumSection", id)))?;
    Ok(Json(section))
}

/// DELETE /api/v1/admin/curriculum/sections/{id}
pub async fn section_delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CurriculumSectionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("CurriculumSection", id)))
    }
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/curriculum/sections/{section_id}/topics
pub async fn topic_create(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Json(mut input): Json<CreateCurriculumTopic>,
) -> AppResult<(StatusCode, Json<CurriculumTopic>)> {
    if CurriculumSectionRepo::find(&state.pool, section_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::not_found(
            "CurriculumSection",
            section_id,
        )));
    }
    input.section_id = section_id;
    let topic = CurriculumTopicRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

/// GET /api/v1/admin/curriculum/sections/{section_id}/topics
pub async fn topic_list(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<Json<Vec<CurriculumTopic>>> {
    let topics = CurriculumTopicRepo::list_for_section(&state.pool, section_id).await?;
    Ok(Json(topics))
}

/// PUT /api/v1/admin/curriculum/topics/{id}
pub async fn topic_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCurriculumTopic>,
) -> AppResult<Json<CurriculumTopic>> {
    let topic = CurriculumTopicRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CurriculumTopic", id)))?;
    Ok(Json(topic))
}

/// DELETE /api/v1/admin/curriculum/topics/{id}
pub async fn topic_delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CurriculumTopicRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("CurriculumTopic", id)))
    }
}
