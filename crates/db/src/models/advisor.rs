//! Advisor / mentor profiles.
//!
//! Bio paragraphs are stored raw; keyword highlighting is applied when
//! the public API serves them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yume_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Advisor {
    pub id: DbId,
    pub name: String,
    pub subtitle: String,
    pub image: String,
    pub title: String,
    pub bio_part1: String,
    pub bio_part2: String,
    pub bio_hidden1: String,
    pub bio_hidden2: String,
    /// Newline-delimited phrases wrapped in a highlight span at render.
    pub keywords_to_highlight: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Advisor {
    /// Whether the profile has hidden paragraphs behind "Read More".
    pub fn has_more_content(&self) -> bool {
        !self.bio_hidden1.is_empty() || !self.bio_hidden2.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdvisor {
    pub name: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
    pub bio_part1: Option<String>,
    pub bio_part2: Option<String>,
    pub bio_hidden1: Option<String>,
    pub bio_hidden2: Option<String>,
    pub keywords_to_highlight: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdvisor {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
    pub bio_part1: Option<String>,
    pub bio_part2: Option<String>,
    pub bio_hidden1: Option<String>,
    pub bio_hidden2: Option<String>,
    pub keywords_to_highlight: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
