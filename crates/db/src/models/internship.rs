//! Internship section content. The section itself is a singleton; the
//! admin API refuses to create a second row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yume_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InternshipSection {
    pub id: DbId,
    pub badge_text: String,
    pub title: String,
    pub description: String,
    pub partner_companies: i32,
    pub job_conversion_rate: i32,
    pub students_placed: i32,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl InternshipSection {
    pub fn partner_companies_display(&self) -> String {
        format!("{}+", self.partner_companies)
    }

    pub fn job_conversion_display(&self) -> String {
        format!("{}%", self.job_conversion_rate)
    }

    pub fn students_placed_display(&self) -> String {
        format!("{}+", self.students_placed)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInternshipSection {
    pub badge_text: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub partner_companies: Option<i32>,
    pub job_conversion_rate: Option<i32>,
    pub students_placed: Option<i32>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInternshipSection {
    pub badge_text: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub partner_companies: Option<i32>,
    pub job_conversion_rate: Option<i32>,
    pub students_placed: Option<i32>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InternshipBenefit {
    pub id: DbId,
    pub section_id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub icon_color: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInternshipBenefit {
    #[serde(default)]
    pub section_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInternshipBenefit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub sort_order: Option<i32>,
}

/// The internship section with counters formatted and benefits loaded.
#[derive(Debug, Serialize)]
pub struct InternshipSectionView {
    #[serde(flatten)]
    pub section: InternshipSection,
    pub partner_companies_display: String,
    pub job_conversion_display: String,
    pub students_placed_display: String,
    pub benefits: Vec<InternshipBenefit>,
}
