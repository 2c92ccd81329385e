//! Handlers for public lead-capture forms and the admin lead listings.
//!
//! The submission endpoints answer with `{ "success": ... }` rather
//! than the usual error envelope so the public forms can render the
//! outcome without inspecting status codes alone. Storage failures are
//! logged server-side and reported with a generic message.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;
use yume_core::choices::{is_choice, ENROLLMENT_COURSES, ENROLLMENT_EDUCATION};
use yume_db::models::lead::{
    ContactMessage, CreateContactMessage, CreateEnquiry, CreateEnrollment, Enquiry, Enrollment,
};
use yume_db::repositories::{ContactMessageRepo, EnquiryRepo, EnrollmentRepo};

use crate::error::{validation_message, AppResult};
use crate::response::SubmitResponse;
use crate::state::AppState;

const STORE_FAILURE_MESSAGE: &str = "Unable to submit right now, please try again later";

/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> (StatusCode, Json<SubmitResponse>) {
    if let Err(errors) = input.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::failure(validation_message(&errors))),
        );
    }
    match ContactMessageRepo::create(&state.pool, &input).await {
        Ok(_) => (StatusCode::CREATED, Json(SubmitResponse::ok())),
        Err(err) => {
            tracing::error!(error = %err, "failed to store contact message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse::failure(STORE_FAILURE_MESSAGE)),
            )
        }
    }
}

/// POST /api/v1/enroll
pub async fn submit_enrollment(
    State(state): State<AppState>,
    Json(input): Json<CreateEnrollment>,
) -> (StatusCode, Json<SubmitResponse>) {
    if let Err(errors) = input.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::failure(validation_message(&errors))),
        );
    }
    if !is_choice(ENROLLMENT_EDUCATION, &input.education) {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::failure(
                "education: select one of the listed qualifications",
            )),
        );
    }
    if !is_choice(ENROLLMENT_COURSES, &input.course) {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::failure(
                "course: select one of the listed courses",
            )),
        );
    }
    match EnrollmentRepo::create(&state.pool, &input).await {
        Ok(_) => (StatusCode::CREATED, Json(SubmitResponse::ok())),
        Err(err) => {
            tracing::error!(error = %err, "failed to store enrollment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse::failure(STORE_FAILURE_MESSAGE)),
            )
        }
    }
}

/// POST /api/v1/enquiry
pub async fn submit_enquiry(
    State(state): State<AppState>,
    Json(input): Json<CreateEnquiry>,
) -> (StatusCode, Json<SubmitResponse>) {
    if let Err(errors) = input.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::failure(validation_message(&errors))),
        );
    }
    match EnquiryRepo::create(&state.pool, &input).await {
        Ok(_) => (StatusCode::CREATED, Json(SubmitResponse::ok())),
        Err(err) => {
            tracing::error!(error = %err, "failed to store enquiry");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse::failure(STORE_FAILURE_MESSAGE)),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/leads/contact-messages
pub async fn list_contact_messages(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactMessageRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// GET /api/v1/admin/leads/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Enrollment>>> {
    let enrollments = EnrollmentRepo::list(&state.pool).await?;
    Ok(Json(enrollments))
}

/// GET /api/v1/admin/leads/enquiries
pub async fn list_enquiries(State(state): State<AppState>) -> AppResult<Json<Vec<Enquiry>>> {
    let enquiries = EnquiryRepo::list(&state.pool).await?;
    Ok(Json(enquiries))
}
