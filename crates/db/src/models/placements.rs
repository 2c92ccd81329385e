//! Placements page content: sections, company logos, and the trailing
//! "and many more" block.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yume_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlacementsSection {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub companies_count: i32,
    pub students_placed: i32,
    pub sectors_count: i32,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PlacementsSection {
    pub fn companies_display(&self) -> String {
        format!("{}+", self.companies_count)
    }

    pub fn students_display(&self) -> String {
        format!("{}+", self.students_placed)
    }

    pub fn sectors_display(&self) -> String {
        format!("{}+", self.sectors_count)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlacementsSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub companies_count: Option<i32>,
    pub students_placed: Option<i32>,
    pub sectors_count: Option<i32>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlacementsSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub companies_count: Option<i32>,
    pub students_placed: Option<i32>,
    pub sectors_count: Option<i32>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanyLogo {
    pub id: DbId,
    pub section_id: DbId,
    pub company_name: String,
    pub logo: String,
    pub alt_text: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyLogo {
    #[serde(default)]
    pub section_id: DbId,
    pub company_name: String,
    pub logo: Option<String>,
    pub alt_text: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCompanyLogo {
    pub company_name: Option<String>,
    pub logo: Option<String>,
    pub alt_text: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// The "and many more" block; at most one per section.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ManyMoreCompanies {
    pub id: DbId,
    pub section_id: DbId,
    pub additional_count: i32,
    pub label: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ManyMoreCompanies {
    pub fn count_display(&self) -> String {
        format!("+{}+", self.additional_count)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertManyMoreCompanies {
    pub additional_count: Option<i32>,
    pub label: Option<String>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A placements section with counters formatted and children loaded.
#[derive(Debug, Serialize)]
pub struct PlacementsSectionView {
    #[serde(flatten)]
    pub section: PlacementsSection,
    pub companies_display: String,
    pub students_display: String,
    pub sectors_display: String,
    pub company_logos: Vec<CompanyLogo>,
    pub many_more: Option<ManyMoreView>,
}

#[derive(Debug, Serialize)]
pub struct ManyMoreView {
    #[serde(flatten)]
    pub many_more: ManyMoreCompanies,
    pub count_display: String,
}
