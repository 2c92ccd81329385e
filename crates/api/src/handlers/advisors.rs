//! Handlers for the `/advisors` resource.
//!
//! The public listing applies keyword highlighting to each bio
//! paragraph at serve time; admins see the raw stored text.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use yume_core::error::CoreError;
use yume_core::highlight::highlight_keywords;
use yume_core::types::{DbId, Timestamp};
use yume_db::models::advisor::{Advisor, CreateAdvisor, UpdateAdvisor};
use yume_db::repositories::AdvisorRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// An advisor as the public site renders it: bio paragraphs with
/// keyword highlight spans applied.
#[derive(Debug, Serialize)]
pub struct AdvisorProfile {
    pub id: DbId,
    pub name: String,
    pub subtitle: String,
    pub image: String,
    pub title: String,
    pub bio_part1: String,
    pub bio_part2: String,
    pub bio_hidden1: String,
    pub bio_hidden2: String,
    /// Whether the profile has hidden paragraphs behind "Read More".
    pub has_more_content: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AdvisorProfile {
    fn from_advisor(advisor: Advisor) -> Self {
        let keywords = &advisor.keywords_to_highlight;
        Self {
            has_more_content: advisor.has_more_content(),
            bio_part1: highlight_keywords(&advisor.bio_part1, keywords),
            bio_part2: highlight_keywords(&advisor.bio_part2, keywords),
            bio_hidden1: highlight_keywords(&advisor.bio_hidden1, keywords),
            bio_hidden2: highlight_keywords(&advisor.bio_hidden2, keywords),
            id: advisor.id,
            name: advisor.name,
            subtitle: advisor.subtitle,
            image: advisor.image,
            title: advisor.title,
            sort_order: advisor.sort_order,
            created_at: advisor.created_at,
            updated_at: advisor.updated_at,
        }
    }
}

/// GET /api/v1/advisors
pub async fn list_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AdvisorProfile>>>> {
    let advisors = AdvisorRepo::list_active(&state.pool).await?;
    let profiles = advisors
        .into_iter()
        .map(AdvisorProfile::from_advisor)
        .collect();
    Ok(Json(DataResponse { data: profiles }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/advisors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAdvisor>,
) -> AppResult<(StatusCode, Json<Advisor>)> {
    let advisor = AdvisorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(advisor)))
}

/// GET /api/v1/admin/advisors
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Advisor>>> {
    let advisors = AdvisorRepo::list_all(&state.pool).await?;
    Ok(Json(advisors))
}

/// GET /api/v1/admin/advisors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Advisor>> {
    let advisor = AdvisorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Advisor", id)))?;
    Ok(Json(advisor))
}

/// PUT /api/v1/admin/advisors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdvisor>,
) -> AppResult<Json<Advisor>> {
    let advisor = AdvisorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Advisor", id)))?;
    Ok(Json(advisor))
}

/// DELETE /api/v1/admin/advisors/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AdvisorRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Advisor", id)))
    }
}
