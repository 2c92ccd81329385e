//! Handlers for homepage hero slides.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yume_core::error::CoreError;
use yume_core::types::DbId;
use yume_db::models::hero::{CreateHeroSlide, HeroSlide, UpdateHeroSlide};
use yume_db::repositories::HeroSlideRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/hero-slides
pub async fn list_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<HeroSlide>>>> {
    let slides = HeroSlideRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: slides }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/hero-slides
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHeroSlide>,
) -> AppResult<(StatusCode, Json<HeroSlide>)> {
    let slide = HeroSlideRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(slide)))
}

/// GET /api/v1/admin/hero-slides
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<HeroSlide>>> {
    let slides = HeroSlideRepo::list_all(&state.pool).await?;
    Ok(Json(slides))
}

/// GET /api/v1/admin/hero-slides/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeroSlide>> {
    let slide = HeroSlideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("HeroSlide", id)))?;
    Ok(Json(slide))
}

/// PUT /api/v1/admin/hero-slides/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroSlide>,
) -> AppResult<Json<HeroSlide>> {
    let slide = HeroSlideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("HeroSlide", id)))?;
    Ok(Json(slide))
}

/// DELETE /api/v1/admin/hero-slides/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if HeroSlideRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("HeroSlide", id)))
    }
}
