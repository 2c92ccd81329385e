//! Repository for the single contact-information row.

use sqlx::PgPool;

use crate::models::contact_info::{ContactInformation, UpsertContactInformation};

const COLUMNS: &str = "id, address, phone, email, created_at, updated_at";

pub struct ContactInformationRepo;

impl ContactInformationRepo {
    pub async fn find(pool: &PgPool) -> Result<Option<ContactInformation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contact_information ORDER BY id ASC LIMIT 1");
        sqlx::query_as::<_, ContactInformation>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Replace the single row, creating it when absent.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertContactInformation,
    ) -> Result<ContactInformation, sqlx::Error> {
        if let Some(existing) = Self::find(pool).await? {
            let query = format!(
                "UPDATE contact_information SET
                    address = $2, phone = $3, email = $4, updated_at = NOW()
                 WHERE id = $1
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, ContactInformation>(&query)
                .bind(existing.id)
                .bind(&input.address)
                .bind(&input.phone)
                .bind(&input.email)
                .fetch_one(pool)
                .await
        } else {
            let query = format!(
                "INSERT INTO contact_information (address, phone, email)
                 VALUES ($1, $2, $3)
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, ContactInformation>(&query)
                .bind(&input.address)
                .bind(&input.phone)
                .bind(&input.email)
                .fetch_one(pool)
                .await
        }
    }
}
