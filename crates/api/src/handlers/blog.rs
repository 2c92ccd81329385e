//! Handlers for the `/blog` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yume_core::choices::{is_choice, BLOG_CATEGORIES};
use yume_core::error::CoreError;
use yume_core::types::DbId;
use yume_db::models::blog::{BlogPost, BlogPostPage, CreateBlogPost, UpdateBlogPost};
use yume_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn check_category(value: &Option<String>) -> Result<(), AppError> {
    if let Some(category) = value {
        if !is_choice(BLOG_CATEGORIES, category) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{category}' is not a recognized blog category"
            ))));
        }
    }
    Ok(())
}

/// GET /api/v1/blog
pub async fn list_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BlogPost>>>> {
    let posts = BlogPostRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/blog/{slug}
pub async fn page_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<BlogPostPage>>> {
    let page = BlogPostRepo::page_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_key("BlogPost", &slug)))?;
    Ok(Json(DataResponse { data: page }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/blog
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    check_category(&input.category)?;
    let post = BlogPostRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/v1/admin/blog
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list_all(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/v1/admin/blog/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("BlogPost", id)))?;
    Ok(Json(post))
}

/// PUT /api/v1/admin/blog/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    check_category(&input.category)?;
    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("BlogPost", id)))?;
    Ok(Json(post))
}

/// DELETE /api/v1/admin/blog/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BlogPostRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("BlogPost", id)))
    }
}
