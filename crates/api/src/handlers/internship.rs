//! Handlers for the internship section (a singleton) and its benefit
//! cards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yume_core::error::CoreError;
use yume_core::types::DbId;
use yume_db::models::internship::{
    CreateInternshipBenefit, CreateInternshipSection, InternshipBenefit, InternshipSection,
    InternshipSectionView, UpdateInternshipBenefit, UpdateInternshipSection,
};
use yume_db::repositories::{InternshipBenefitRepo, InternshipSectionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/internship
///
/// The active section with formatted counters and benefits, or
/// `data: null` when none is configured.
pub async fn get_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<InternshipSectionView>>>> {
    let view = InternshipSectionRepo::view_active(&state.pool).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Admin: section
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/internship
///
/// Creating a second section is refused with 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInternshipSection>,
) -> AppResult<(StatusCode, Json<InternshipSection>)> {
    let section = InternshipSectionRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "An internship section already exists".into(),
            ))
        })?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// GET /api/v1/admin/internship
pub async fn get(State(state): State<AppState>) -> AppResult<Json<InternshipSection>> {
    let section = InternshipSectionRepo::find(&state.pool)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_key("InternshipSection", "singleton")))?;
    Ok(Json(section))
}

/// PUT /api/v1/admin/internship/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInternshipSection>,
) -> AppResult<Json<InternshipSection>> {
    let section = InternshipSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("InternshipSection", id)))?;
    Ok(Json(section))
}

/// DELETE /api/v1/admin/internship/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if InternshipSectionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("InternshipSection", id)))
    }
}

// ---------------------------------------------------------------------------
// Admin: benefits
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/internship/{section_id}/benefits
pub async fn benefit_create(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Json(mut input): Json<CreateInternshipBenefit>,
) -> AppResult<(StatusCode, Json<InternshipBenefit>)> {
    input.section_id = section_id;
    let benefit = InternshipBenefitRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(benefit)))
}

/// GET /api/v1/admin/internship/{section_id}/benefits
pub async fn benefit_list(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<Json<Vec<InternshipBenefit>>> {
    let benefits = InternshipBenefitRepo::list(&state.pool, section_id).await?;
    Ok(Json(benefits))
}

/// PUT /api/v1/admin/internship/{section_id}/benefits/{id}
pub async fn benefit_update(
    State(state): State<AppState>,
    Path((_section_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateInternshipBenefit>,
) -> AppResult<Json<InternshipBenefit>> {
    let benefit = InternshipBenefitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("InternshipBenefit", id)))?;
    Ok(Json(benefit))
}

/// DELETE /api/v1/admin/internship/{section_id}/benefits/{id}
pub async fn benefit_delete(
    State(state): State<AppState>,
    Path((_section_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if InternshipBenefitRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("InternshipBenefit", id)))
    }
}
