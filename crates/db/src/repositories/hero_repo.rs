use sqlx::PgPool;
use yume_core::types::DbId;

use crate::models::hero::{CreateHeroSlide, HeroSlide, UpdateHeroSlide};

const COLUMNS: &str = "id, title, subtitle, image, sort_order, is_active, created_at, updated_at";

pub struct HeroSlideRepo;

impl HeroSlideRepo {
    pub async fn create(pool: &PgPool, input: &CreateHeroSlide) -> Result<HeroSlide, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_slides (title, subtitle, image, sort_order, is_active)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, 0),
                     COALESCE($5, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<HeroSlide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hero_slides WHERE is_active ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, HeroSlide>(&query).fetch_all(pool).await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<HeroSlide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_slides ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, HeroSlide>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_slides WHERE id = $1");
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroSlide,
    ) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_slides SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                image = COALESCE($4, image),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_slides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
