//! Curriculum hierarchy: months contain sections, sections contain
//! topics. Sections and topics denormalize a back-reference to the
//! course; the repository resolves it from the parent when omitted.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yume_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CurriculumMonth {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub subtitle: String,
    pub meta_info: String,
    pub badge_color: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCurriculumMonth {
    #[serde(default)]
    pub course_id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub meta_info: Option<String>,
    pub badge_color: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCurriculumMonth {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub meta_info: Option<String>,
    pub badge_color: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CurriculumSection {
    pub id: DbId,
    pub month_id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a section. `course_id` may be omitted; it is then
/// resolved from the parent month.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCurriculumSection {
    pub month_id: DbId,
    pub course_id: Option<DbId>,
    pub title: String,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCurriculumSection {
    pub title: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CurriculumTopic {
    pub id: DbId,
    pub section_id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a topic. `course_id` may be omitted; it is then
/// resolved from the parent section.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCurriculumTopic {
    pub section_id: DbId,
    pub course_id: Option<DbId>,
    pub title: String,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCurriculumTopic {
    pub title: Option<String>,
    pub sort_order: Option<i32>,
}

// ---------------------------------------------------------------------------
// Nested views
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CurriculumSectionView {
    #[serde(flatten)]
    pub section: CurriculumSection,
    pub topics: Vec<CurriculumTopic>,
}

#[derive(Debug, Serialize)]
pub struct CurriculumMonthView {
    #[serde(flatten)]
    pub month: CurriculumMonth,
    pub sections: Vec<CurriculumSectionView>,
}
