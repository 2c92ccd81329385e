//! Handlers for placements page content: sections, company logos, and
//! the "and many more" block.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yume_core::error::CoreError;
use yume_core::types::DbId;
use yume_db::models::placements::{
    CompanyLogo, CreateCompanyLogo, CreatePlacementsSection, ManyMoreCompanies,
    PlacementsSection, PlacementsSectionView, UpdateCompanyLogo, UpdatePlacementsSection,
    UpsertManyMoreCompanies,
};
use yume_db::repositories::{CompanyLogoRepo, ManyMoreCompaniesRepo, PlacementsSectionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/placements
///
/// All active sections with formatted counters, active logos, and the
/// "many more" block when present.
pub async fn list_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PlacementsSectionView>>>> {
    let views = PlacementsSectionRepo::views_active(&state.pool).await?;
    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// Admin: sections
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/placements
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlacementsSection>,
) -> AppResult<(StatusCode, Json<PlacementsSection>)> {
    let section = PlacementsSectionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// GET /api/v1/admin/placements
pub async fn list_all(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PlacementsSection>>> {
    let sections = PlacementsSectionRepo::list_all(&state.pool).await?;
    Ok(Json(sections))
}

/// GET /api/v1/admin/placements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlacementsSection>> {
    let section = PlacementsSectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("PlacementsSection", id)))?;
    Ok(Json(section))
}

/// PUT /api/v1/admin/placements/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlacementsSection>,
) -> AppResult<Json<PlacementsSection>> {
    let section = PlacementsSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("PlacementsSection", id)))?;
    Ok(Json(section))
}

/// DELETE /api/v1/admin/placements/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PlacementsSectionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("PlacementsSection", id)))
    }
}

// ---------------------------------------------------------------------------
// Admin: company logos
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/placements/{section_id}/logos
pub async fn logo_create(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Json(mut input): Json<CreateCompanyLogo>,
) -> AppResult<(StatusCode, Json<CompanyLogo>)> {
    input.section_id = section_id;
    let logo = CompanyLogoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(logo)))
}

/// GET /api/v1/admin/placements/{section_id}/logos
pub async fn logo_list(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<Json<Vec<CompanyLogo>>> {
    let logos = CompanyLogoRepo::list(&state.pool, section_id).await?;
    Ok(Json(logos))
}

/// PUT /api/v1/admin/placements/{section_id}/logos/{id}
pub async fn logo_update(
    State(state): State<AppState>,
    Path((_section_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCompanyLogo>,
) -> AppResult<Json<CompanyLogo>> {
    let logo = CompanyLogoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CompanyLogo", id)))?;
    Ok(Json(logo))
}

/// DELETE /api/v1/admin/placements/{section_id}/logos/{id}
pub async fn logo_delete(
    State(state): State<AppState>,
    Path((_section_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CompanyLogoRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("CompanyLogo", id)))
    }
}

// ---------------------------------------------------------------------------
// Admin: "many more" block
// ---------------------------------------------------------------------------

/// PUT /api/v1/admin/placements/{section_id}/many-more
///
/// Creates or replaces the block; a section carries at most one.
pub async fn many_more_upsert(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Json(input): Json<UpsertManyMoreCompanies>,
) -> AppResult<Json<ManyMoreCompanies>> {
    PlacementsSectionRepo::find_by_id(&state.pool, section_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("PlacementsSection", section_id)))?;
    let many_more = ManyMoreCompaniesRepo::upsert(&state.pool, section_id, &input).await?;
    Ok(Json(many_more))
}

/// GET /api/v1/admin/placements/{section_id}/many-more
pub async fn many_more_get(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<Json<ManyMoreCompanies>> {
    let many_more = ManyMoreCompaniesRepo::find(&state.pool, section_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("ManyMoreCompanies", section_id)))?;
    Ok(Json(many_more))
}

/// DELETE /api/v1/admin/placements/{section_id}/many-more
pub async fn many_more_delete(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ManyMoreCompaniesRepo::delete(&state.pool, section_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found(
            "ManyMoreCompanies",
            section_id,
        )))
    }
}
