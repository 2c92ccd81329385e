use sqlx::PgPool;
use yume_core::types::DbId;

use crate::models::advisor::{Advisor, CreateAdvisor, UpdateAdvisor};

const COLUMNS: &str = "id, name, subtitle, image, title, bio_part1, bio_part2, bio_hidden1, \
                       bio_hidden2, keywords_to_highlight, sort_order, is_active, created_at, \
                       updated_at";

pub struct AdvisorRepo;

impl AdvisorRepo {
    pub async fn create(pool: &PgPool, input: &CreateAdvisor) -> Result<Advisor, sqlx::Error> {
        let query = format!(
            "INSERT INTO advisors (name, subtitle, image, title, bio_part1, bio_part2,
                                   bio_hidden1, bio_hidden2, keywords_to_highlight,
                                   sort_order, is_active)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, 'Advisor & Mentor'),
                     COALESCE($5, ''), COALESCE($6, ''), COALESCE($7, ''), COALESCE($8, ''),
                     COALESCE($9, ''), COALESCE($10, 0), COALESCE($11, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advisor>(&query)
            .bind(&input.name)
            .bind(&input.subtitle)
            .bind(&input.image)
            .bind(&input.title)
            .bind(&input.bio_part1)
            .bind(&input.bio_part2)
            .bind(&input.bio_hidden1)
            .bind(&input.bio_hidden2)
            .bind(&input.keywords_to_highlight)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Advisor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM advisors WHERE is_active ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Advisor>(&query).fetch_all(pool).await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Advisor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advisors ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, Advisor>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Advisor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advisors WHERE id = $1");
        sqlx::query_as::<_, Advisor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdvisor,
    ) -> Result<Option<Advisor>, sqlx::Error> {
        let query = format!(
            "UPDATE advisors SET
                name = COALESCE($2, name),
                subtitle = COALESCE($3, subtitle),
                image = COALESCE($4, image),
                title = COALESCE($5, title),
                bio_part1 = COALESCE($6, bio_part1),
                bio_part2 = COALESCE($7, bio_part2),
                bio_hidden1 = COALESCE($8, bio_hidden1),
                bio_hidden2 = COALESCE($9, bio_hidden2),
                keywords_to_highlight = COALESCE($10, keywords_to_highlight),
                sort_order = COALESCE($11, sort_order),
                is_active = COALESCE($12, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advisor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.subtitle)
            .bind(&input.image)
            .bind(&input.title)
            .bind(&input.bio_part1)
            .bind(&input.bio_part2)
            .bind(&input.bio_hidden1)
            .bind(&input.bio_hidden2)
            .bind(&input.keywords_to_highlight)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM advisors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
