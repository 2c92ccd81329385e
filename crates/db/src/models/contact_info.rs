//! The site-wide contact information block (single managed row).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yume_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactInformation {
    pub id: DbId,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Upsert DTO: replaces the single row, creating it if absent.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertContactInformation {
    pub address: String,
    pub phone: String,
    pub email: String,
}
