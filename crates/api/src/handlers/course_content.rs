//! Admin handlers for the per-course child collections, nested under
//! `/admin/courses/{course_id}/...`.
//!
//! Creates override the body's `course_id` with the value from the URL
//! path so a child can never land under the wrong course.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yume_core::choices::{is_choice, is_color, CAREER_ICON_TYPES, COURSE_HIGHLIGHT_ICONS};
use yume_core::error::CoreError;
use yume_core::types::DbId;
use yume_db::models::course::{
    CourseCareerOpportunity, CourseCertificationPoint, CourseFaq, CourseHighlight,
    CourseLearningOutcome, CourseTool, CreateCourseCareerOpportunity,
    CreateCourseCertificationPoint, CreateCourseFaq, CreateCourseHighlight,
    CreateCourseLearningOutcome, CreateCourseTool, UpdateCourseCareerOpportunity,
    UpdateCourseCertificationPoint, UpdateCourseFaq, UpdateCourseHighlight,
    UpdateCourseLearningOutcome, UpdateCourseTool,
};
use yume_db::repositories::{
    CourseCareerOpportunityRepo, CourseCertificationPointRepo, CourseFaqRepo, CourseHighlightRepo,
    CourseLearningOutcomeRepo, CourseToolRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn check_color(value: &Option<String>) -> Result<(), AppError> {
    if let Some(color) = value {
        if !is_color(color) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{color}' is not a recognized color"
            ))));
        }
    }
    Ok(())
}

fn check_highlight_icon(value: &Option<String>) -> Result<(), AppError> {
    if let Some(icon_class) = value {
        if !is_choice(COURSE_HIGHLIGHT_ICONS, icon_class) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{icon_class}' is not a recognized highlight icon"
            ))));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Highlights
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/courses/{course_id}/highlights
pub async fn highlight_create(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(mut input): Json<CreateCourseHighlight>,
) -> AppResult<(StatusCode, Json<CourseHighlight>)> {
    check_highlight_icon(&input.icon_class)?;
    input.course_id = course_id;
    let highlight = CourseHighlightRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(highlight)))
}

/// GET /api/v1/admin/courses/{course_id}/highlights
pub async fn highlight_list(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<CourseHighlight>>> {
    let highlights = CourseHighlightRepo::list(&state.pool, course_id).await?;
    Ok(Json(highlights))
}

/// PUT /api/v1/admin/courses/{course_id}/highlights/{id}
pub async fn highlight_update(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCourseHighlight>,
) -> AppResult<Json<CourseHighlight>> {
    check_highlight_icon(&input.icon_class)?;
    let highlight = CourseHighlightRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CourseHighlight", id)))?;
    Ok(Json(highlight))
}

/// DELETE /api/v1/admin/courses/{course_id}/highlights/{id}
pub async fn highlight_delete(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CourseHighlightRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("CourseHighlight", id)))
    }
}

// ---------------------------------------------------------------------------
// Learning outcomes
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/courses/{course_id}/learning-outcomes
pub async fn outcome_create(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(mut input): Json<CreateCourseLearningOutcome>,
) -> AppResult<(StatusCode, Json<CourseLearningOutcome>)> {
    check_color(&input.color)?;
    input.course_id = course_id;
    let outcome = CourseLearningOutcomeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// GET /api/v1/admin/courses/{course_id}/learning-outcomes
pub async fn outcome_list(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<CourseLearningOutcome>>> {
    let outcomes = CourseLearningOutcomeRepo::list(&state.pool, course_id).await?;
    Ok(Json(outcomes))
}

/// PUT /api/v1/admin/courses/{course_id}/learning-outcomes/{id}
pub async fn outcome_update(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCourseLearningOutcome>,
) -> AppResult<Json<CourseLearningOutcome>> {
    check_color(&input.color)?;
    let outcome = CourseLearningOutcomeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CourseLearningOutcome", id)))?;
    Ok(Json(outcome))
}

/// DELETE /api/v1/admin/courses/{course_id}/learning-outcomes/{id}
pub async fn outcome_delete(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CourseLearningOutcomeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found(
            "CourseLearningOutcome",
            id,
        )))
    }
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/courses/{course_id}/tools
pub async fn tool_create(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(mut input): Json<CreateCourseTool>,
) -> AppResult<(StatusCode, Json<CourseTool>)> {
    check_color(&input.color)?;
    input.course_id = course_id;
    let tool = CourseToolRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tool)))
}

/// GET /api/v1/admin/courses/{course_id}/tools
pub async fn tool_list(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<CourseTool>>> {
    let tools = CourseToolRepo::list(&state.pool, course_id).await?;
    Ok(Json(tools))
}

/// PUT /api/v1/admin/courses/{course_id}/tools/{id}
pub async fn tool_update(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCourseTool>,
) -> AppResult<Json<CourseTool>> {
    check_color(&input.color)?;
    let tool = CourseToolRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CourseTool", id)))?;
    Ok(Json(tool))
}

/// DELETE /api/v1/admin/courses/{course_id}/tools/{id}
pub async fn tool_delete(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CourseToolRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("CourseTool", id)))
    }
}

// ---------------------------------------------------------------------------
// Certification points
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/courses/{course_id}/certification-points
pub async fn point_create(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(mut input): Json<CreateCourseCertificationPoint>,
) -> AppResult<(StatusCode, Json<CourseCertificationPoint>)> {
    input.course_id = course_id;
    let point = CourseCertificationPointRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(point)))
}

/// GET /api/v1/admin/courses/{course_id}/certification-points
pub async fn point_list(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<CourseCertificationPoint>>> {
    let points = CourseCertificationPointRepo::list(&state.pool, course_id).await?;
    Ok(Json(points))
}

/// PUT /api/v1/admin/courses/{course_id}/certification-points/{id}
pub async fn point_update(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCourseCertificationPoint>,
) -> AppResult<Json<CourseCertificationPoint>> {
    let point = CourseCertificationPointRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CourseCertificationPoint", id)))?;
    Ok(Json(point))
}

/// DELETE /api/v1/admin/courses/{course_id}/certification-points/{id}
pub async fn point_delete(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CourseCertificationPointRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found(
            "CourseCertificationPoint",
            id,
        )))
    }
}

// ---------------------------------------------------------------------------
// FAQs
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/courses/{course_id}/faqs
pub async fn faq_create(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(mut input): Json<CreateCourseFaq>,
) -> AppResult<(StatusCode, Json<CourseFaq>)> {
    input.course_id = course_id;
    let faq = CourseFaqRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

/// GET /api/v1/admin/courses/{course_id}/faqs
pub async fn faq_list(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<CourseFaq>>> {
    let faqs = CourseFaqRepo::list(&state.pool, course_id).await?;
    Ok(Json(faqs))
}

/// PUT /api/v1/admin/courses/{course_id}/faqs/{id}
pub async fn faq_update(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCourseFaq>,
) -> AppResult<Json<CourseFaq>> {
    let faq = CourseFaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CourseFaq", id)))?;
    Ok(Json(faq))
}

/// DELETE /api/v1/admin/courses/{course_id}/faqs/{id}
pub async fn faq_delete(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CourseFaqRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("CourseFaq", id)))
    }
}

// ---------------------------------------------------------------------------
// Career opportunities
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/courses/{course_id}/career-opportunities
pub async fn career_create(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(mut input): Json<CreateCourseCareerOpportunity>,
) -> AppResult<(StatusCode, Json<CourseCareerOpportunity>)> {
    if let Some(icon_type) = &input.icon_type {
        if !is_choice(CAREER_ICON_TYPES, icon_type) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{icon_type}' is not a recognized icon type"
            ))));
        }
    }
    input.course_id = course_id;
    let career = CourseCareerOpportunityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(career)))
}

/// GET /api/v1/admin/courses/{course_id}/career-opportunities
pub async fn career_list(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<CourseCareerOpportunity>>> {
    let careers = CourseCareerOpportunityRepo::list(&state.pool, course_id).await?;
    Ok(Json(careers))
}

/// PUT /api/v1/admin/courses/{course_id}/career-opportunities/{id}
pub async fn career_update(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCourseCareerOpportunity>,
) -> AppResult<Json<CourseCareerOpportunity>> {
    if let Some(icon_type) = &input.icon_type {
        if !is_choice(CAREER_ICON_TYPES, icon_type) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{icon_type}' is not a recognized icon type"
            ))));
        }
    }
    let career = CourseCareerOpportunityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CourseCareerOpportunity", id)))?;
    Ok(Json(career))
}

/// DELETE /api/v1/admin/courses/{course_id}/career-opportunities/{id}
pub async fn career_delete(
    State(state): State<AppState>,
    Path((_course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CourseCareerOpportunityRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found(
            "CourseCareerOpportunity",
            id,
        )))
    }
}
