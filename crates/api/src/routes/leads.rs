//! Route definitions for lead-capture forms and the admin lead lists.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Public form submission routes, merged directly into `/api/v1`.
///
/// ```text
/// POST /contact    -> submit_contact
/// POST /enroll     -> submit_enrollment
/// POST /enquiry    -> submit_enquiry
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(leads::submit_contact))
        .route("/enroll", post(leads::submit_enrollment))
        .route("/enquiry", post(leads::submit_enquiry))
}

/// Admin routes mounted at `/admin/leads`.
///
/// ```text
/// GET /contact-messages    -> list_contact_messages
/// GET /enrollments         -> list_enrollments
/// GET /enquiries           -> list_enquiries
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/contact-messages", get(leads::list_contact_messages))
        .route("/enrollments", get(leads::list_enrollments))
        .route("/enquiries", get(leads::list_enquiries))
}
