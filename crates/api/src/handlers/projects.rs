//! Handlers for the `/projects` resource.
//!
//! Public endpoints serve active cards; a card's detail page is
//! optional and the public page carries `detail: null` when absent.
//! The admin detail endpoint replaces the whole page in one call.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yume_core::error::CoreError;
use yume_core::types::DbId;
use yume_db::models::project::{
    CreateProjectCard, ProjectCard, ProjectDetail, ProjectDetailInput, ProjectDetailView,
    ProjectPage, UpdateProjectCard,
};
use yume_db::repositories::{ProjectCardRepo, ProjectDetailRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectCard>>>> {
    let cards = ProjectCardRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/projects/{slug}
pub async fn page_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<ProjectPage>>> {
    let page = ProjectCardRepo::page_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_key("Project", &slug)))?;
    Ok(Json(DataResponse { data: page }))
}

// ---------------------------------------------------------------------------
// Admin: cards
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectCard>,
) -> AppResult<(StatusCode, Json<ProjectCard>)> {
    let card = ProjectCardRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// GET /api/v1/admin/projects
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectCard>>> {
    let cards = ProjectCardRepo::list_all(&state.pool).await?;
    Ok(Json(cards))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectCard>> {
    let card = ProjectCardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    Ok(Json(card))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectCard>,
) -> AppResult<Json<ProjectCard>> {
    let card = ProjectCardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    Ok(Json(card))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectCardRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Project", id)))
    }
}

// ---------------------------------------------------------------------------
// Admin: detail page
// ---------------------------------------------------------------------------

/// PUT /api/v1/admin/projects/{id}/detail
///
/// Replaces the detail page wholesale, creating it when absent.
pub async fn detail_replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectDetailInput>,
) -> AppResult<Json<ProjectDetail>> {
    ProjectCardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    let detail = ProjectDetailRepo::replace(&state.pool, id, &input).await?;
    Ok(Json(detail))
}

/// GET /api/v1/admin/projects/{id}/detail
pub async fn detail_get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetailView>> {
    let view = ProjectDetailRepo::view_for_card(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("ProjectDetail", id)))?;
    Ok(Json(view))
}

/// DELETE /api/v1/admin/projects/{id}/detail
pub async fn detail_delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectDetailRepo::delete_for_card(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("ProjectDetail", id)))
    }
}
