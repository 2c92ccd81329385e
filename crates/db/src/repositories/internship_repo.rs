//! Repositories for the internship section (a singleton) and its
//! benefit cards.

use sqlx::PgPool;
use yume_core::types::DbId;

use crate::models::internship::{
    CreateInternshipBenefit, CreateInternshipSection, InternshipBenefit, InternshipSection,
    InternshipSectionView, UpdateInternshipBenefit, UpdateInternshipSection,
};

const SECTION_COLUMNS: &str = "id, badge_text, title, description, partner_companies, \
                               job_conversion_rate, students_placed, sort_order, is_active, \
                               created_at, updated_at";
const BENEFIT_COLUMNS: &str = "id, section_id, title, description, icon, icon_color, \
                               sort_order, created_at, updated_at";

pub struct InternshipSectionRepo;

impl InternshipSectionRepo {
    /// Insert the section. Returns `Ok(None)` when a row already
    /// exists; the handler maps that to a conflict.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInternshipSection,
    ) -> Result<Option<InternshipSection>, sqlx::Error> {
        if Self::find(pool).await?.is_some() {
            return Ok(None);
        }
        let query = format!(
            "INSERT INTO internship_sections (badge_text, title, description,
                                              partner_companies, job_conversion_rate,
                                              students_placed, sort_order, is_active)
             VALUES (COALESCE($1, 'Career Launchpad'), $2, COALESCE($3, ''),
                     COALESCE($4, 300), COALESCE($5, 85), COALESCE($6, 1200),
                     COALESCE($7, 2), COALESCE($8, TRUE))
             RETURNING {SECTION_COLUMNS}"
        );
        let section = sqlx::query_as::<_, InternshipSection>(&query)
            .bind(&input.badge_text)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.partner_companies)
            .bind(input.job_conversion_rate)
            .bind(input.students_placed)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await?;
        Ok(Some(section))
    }

    pub async fn find(pool: &PgPool) -> Result<Option<InternshipSection>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM internship_sections ORDER BY id ASC LIMIT 1"
        );
        sqlx::query_as::<_, InternshipSection>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_active(pool: &PgPool) -> Result<Option<InternshipSection>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM internship_sections WHERE is_active
             ORDER BY id ASC LIMIT 1"
        );
        sqlx::query_as::<_, InternshipSection>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInternshipSection,
    ) -> Result<Option<InternshipSection>, sqlx::Error> {
        let query = format!(
            "UPDATE internship_sections SET
                badge_text = COALESCE($2, badge_text),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                partner_companies = COALESCE($5, partner_companies),
                job_conversion_rate = COALESCE($6, job_conversion_rate),
                students_placed = COALESCE($7, students_placed),
                sort_order = COALESCE($8, sort_order),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, InternshipSection>(&query)
            .bind(id)
            .bind(&input.badge_text)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.partner_companies)
            .bind(input.job_conversion_rate)
            .bind(input.students_placed)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM internship_sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The active section with counters formatted and its benefits in
    /// display order, or `None` when no active section exists.
    pub async fn view_active(pool: &PgPool) -> Result<Option<InternshipSectionView>, sqlx::Error> {
        let Some(section) = Self::find_active(pool).await? else {
            return Ok(None);
        };
        let benefits = InternshipBenefitRepo::list(pool, section.id).await?;
        let partner_companies_display = section.partner_companies_display();
        let job_conversion_display = section.job_conversion_display();
        let students_placed_display = section.students_placed_display();
        Ok(Some(InternshipSectionView {
            section,
            partner_companies_display,
            job_conversion_display,
            students_placed_display,
            benefits,
        }))
    }
}

pub struct InternshipBenefitRepo;

impl InternshipBenefitRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateInternshipBenefit,
    ) -> Result<InternshipBenefit, sqlx::Error> {
        let query = format!(
            "INSERT INTO internship_benefits (section_id, title, description, icon,
                                              icon_color, sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'bi-briefcase'),
                     COALESCE($5, 'primary'), COALESCE($6, 0))
             RETURNING {BENEFIT_COLUMNS}"
        );
        sqlx::query_as::<_, InternshipBenefit>(&query)
            .bind(input.section_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.icon_color)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<InternshipBenefit>, sqlx::Error> {
        let query = format!(
            "SELECT {BENEFIT_COLUMNS} FROM internship_benefits WHERE section_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, InternshipBenefit>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInternshipBenefit,
    ) -> Result<Option<InternshipBenefit>, sqlx::Error> {
        let query = format!(
            "UPDATE internship_benefits SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon),
                icon_color = COALESCE($5, icon_color),
                sort_order = COALESCE($6, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {BENEFIT_COLUMNS}"
        );
        sqlx::query_as::<_, InternshipBenefit>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.icon_color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM internship_benefits WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
