//! Lead records: contact messages, enrollments, and enquiries.
//!
//! Created by anonymous public form submissions; append-only. The
//! create DTOs carry `validator` rules the submission handlers check
//! before persisting.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use yume_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub submitted_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactMessage {
    #[validate(length(min = 1, max = 50, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, max = 15, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub education: String,
    pub course: String,
    pub created_at: Timestamp,
}

/// Enrollment submission. `education` and `course` must additionally
/// belong to the fixed choice sets in `yume_core::choices`; the handler
/// checks that.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEnrollment {
    #[validate(length(min = 1, max = 100, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last name is required"))]
    pub last_name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 15, message = "mobile is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "education is required"))]
    pub education: String,
    #[validate(length(min = 1, message = "course is required"))]
    pub course: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEnquiry {
    #[validate(length(min = 1, max = 100, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last name is required"))]
    pub last_name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 15, message = "mobile is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}
