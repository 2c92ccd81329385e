//! Handlers for the site-wide contact information block.

use axum::extract::State;
use axum::Json;
use yume_db::models::contact_info::{ContactInformation, UpsertContactInformation};
use yume_db::repositories::ContactInformationRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/contact-info
///
/// `data: null` until an admin has saved the block.
pub async fn get_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<ContactInformation>>>> {
    let info = ContactInformationRepo::find(&state.pool).await?;
    Ok(Json(DataResponse { data: info }))
}

/// PUT /api/v1/admin/contact-info
///
/// Replaces the single row, creating it on first save.
pub async fn upsert(
    State(state): State<AppState>,
    Json(input): Json<UpsertContactInformation>,
) -> AppResult<Json<ContactInformation>> {
    let info = ContactInformationRepo::upsert(&state.pool, &input).await?;
    Ok(Json(info))
}
