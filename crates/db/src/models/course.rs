//! Course entity, its child collections, and the course detail view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yume_core::types::{DbId, Timestamp};

use crate::models::curriculum::CurriculumMonthView;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub card_description: String,
    pub image: String,
    pub subtitle: String,
    pub overview: String,
    pub duration: String,
    pub total_hours: String,
    pub level: String,
    pub format: String,
    pub whatsapp_number: String,
    pub contact_number: String,
    /// Unique URL key used for detail-page lookup (`/courses/{course_url}`).
    pub course_url: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub card_description: Option<String>,
    pub image: Option<String>,
    pub subtitle: Option<String>,
    pub overview: Option<String>,
    pub duration: Option<String>,
    pub total_hours: Option<String>,
    pub level: Option<String>,
    pub format: Option<String>,
    pub whatsapp_number: Option<String>,
    pub contact_number: Option<String>,
    pub course_url: String,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing course. All fields are optional.
///
/// `course_url` is intentionally absent: the URL key is fixed at
/// creation so published links stay valid.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub card_description: Option<String>,
    pub image: Option<String>,
    pub subtitle: Option<String>,
    pub overview: Option<String>,
    pub duration: Option<String>,
    pub total_hours: Option<String>,
    pub level: Option<String>,
    pub format: Option<String>,
    pub whatsapp_number: Option<String>,
    pub contact_number: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Child collections
// ---------------------------------------------------------------------------

/// A highlight chip shown on the course detail hero.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseHighlight {
    pub id: DbId,
    pub course_id: DbId,
    pub icon_class: String,
    pub title: String,
    pub description: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseHighlight {
    #[serde(default)]
    pub course_id: DbId,
    pub icon_class: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseHighlight {
    pub icon_class: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// A learning outcome bullet ("what you will learn").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseLearningOutcome {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseLearningOutcome {
    #[serde(default)]
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseLearningOutcome {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

/// A tool or technology taught in the course.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseTool {
    pub id: DbId,
    pub course_id: DbId,
    pub name: String,
    pub description: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseTool {
    #[serde(default)]
    pub course_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseTool {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

/// A certification / placement support bullet.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseCertificationPoint {
    pub id: DbId,
    pub course_id: DbId,
    pub text: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseCertificationPoint {
    #[serde(default)]
    pub course_id: DbId,
    pub text: String,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseCertificationPoint {
    pub text: Option<String>,
    pub sort_order: Option<i32>,
}

/// A frequently asked question on the course page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseFaq {
    pub id: DbId,
    pub course_id: DbId,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseFaq {
    #[serde(default)]
    pub course_id: DbId,
    pub question: String,
    pub answer: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseFaq {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub sort_order: Option<i32>,
}

/// A career opportunity card on the course page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseCareerOpportunity {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub icon_type: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseCareerOpportunity {
    #[serde(default)]
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub icon_type: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseCareerOpportunity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub icon_type: Option<String>,
    pub sort_order: Option<i32>,
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// Everything the course detail page needs, assembled from the course
/// row, its child collections, and the nested curriculum tree.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub highlights: Vec<CourseHighlight>,
    pub curriculum: Vec<CurriculumMonthView>,
    pub learning_outcomes: Vec<CourseLearningOutcome>,
    pub tools: Vec<CourseTool>,
    pub certification_points: Vec<CourseCertificationPoint>,
    pub faqs: Vec<CourseFaq>,
    pub career_opportunities: Vec<CourseCareerOpportunity>,
}
