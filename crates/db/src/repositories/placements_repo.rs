//! Repositories for placements sections, company logos, and the "and
//! many more" block (at most one per section, written via upsert).

use sqlx::PgPool;
use yume_core::types::DbId;

use crate::models::placements::{
    CompanyLogo, CreateCompanyLogo, CreatePlacementsSection, ManyMoreCompanies, ManyMoreView,
    PlacementsSection, PlacementsSectionView, UpdateCompanyLogo, UpdatePlacementsSection,
    UpsertManyMoreCompanies,
};

const SECTION_COLUMNS: &str = "id, title, subtitle, companies_count, students_placed, \
                               sectors_count, sort_order, is_active, created_at, updated_at";
const LOGO_COLUMNS: &str = "id, section_id, company_name, logo, alt_text, sort_order, \
                            is_active, created_at, updated_at";
const MANY_MORE_COLUMNS: &str =
    "id, section_id, additional_count, label, is_active, created_at, updated_at";

pub struct PlacementsSectionRepo;

impl PlacementsSectionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePlacementsSection,
    ) -> Result<PlacementsSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO placements_sections (title, subtitle, companies_count,
                                              students_placed, sectors_count, sort_order,
                                              is_active)
             VALUES (COALESCE($1, 'Where Our Students Build Careers'),
                     COALESCE($2, 'Successfully placed across leading tech, finance, and service sector companies.'),
                     COALESCE($3, 50), COALESCE($4, 500), COALESCE($5, 10), COALESCE($6, 1),
                     COALESCE($7, TRUE))
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, PlacementsSection>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(input.companies_count)
            .bind(input.students_placed)
            .bind(input.sectors_count)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<PlacementsSection>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM placements_sections WHERE is_active
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, PlacementsSection>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<PlacementsSection>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM placements_sections ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, PlacementsSection>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PlacementsSection>, sqlx::Error> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM placements_sections WHERE id = $1");
        sqlx::query_as::<_, PlacementsSection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlacementsSection,
    ) -> Result<Option<PlacementsSection>, sqlx::Error> {
        let query = format!(
            "UPDATE placements_sections SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                companies_count = COALESCE($4, companies_count),
                students_placed = COALESCE($5, students_placed),
                sectors_count = COALESCE($6, sectors_count),
                sort_order = COALESCE($7, sort_order),
                is_active = COALESCE($8, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, PlacementsSection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(input.companies_count)
            .bind(input.students_placed)
            .bind(input.sectors_count)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM placements_sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All active sections with formatted counters, active logos, and
    /// the active "many more" block when present.
    pub async fn views_active(pool: &PgPool) -> Result<Vec<PlacementsSectionView>, sqlx::Error> {
        let sections = Self::list_active(pool).await?;
        let mut views = Vec::with_capacity(sections.len());
        for section in sections {
            let company_logos = CompanyLogoRepo::list_active(pool, section.id).await?;
            let many_more = ManyMoreCompaniesRepo::find_active(pool, section.id)
                .await?
                .map(|m| {
                    let count_display = m.count_display();
                    ManyMoreView {
                        many_more: m,
                        count_display,
                    }
                });
            let companies_display = section.companies_display();
            let students_display = section.students_display();
            let sectors_display = section.sectors_display();
            views.push(PlacementsSectionView {
                section,
                companies_display,
                students_display,
                sectors_display,
                company_logos,
                many_more,
            });
        }
        Ok(views)
    }
}

pub struct CompanyLogoRepo;

impl CompanyLogoRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCompanyLogo,
    ) -> Result<CompanyLogo, sqlx::Error> {
        let query = format!(
            "INSERT INTO company_logos (section_id, company_name, logo, alt_text, sort_order,
                                        is_active)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, 0),
                     COALESCE($6, TRUE))
             RETURNING {LOGO_COLUMNS}"
        );
        sqlx::query_as::<_, CompanyLogo>(&query)
            .bind(input.section_id)
            .bind(&input.company_name)
            .bind(&input.logo)
            .bind(&input.alt_text)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<CompanyLogo>, sqlx::Error> {
        let query = format!(
            "SELECT {LOGO_COLUMNS} FROM company_logos WHERE section_id = $1 AND is_active
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, CompanyLogo>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list(pool: &PgPool, section_id: DbId) -> Result<Vec<CompanyLogo>, sqlx::Error> {
        let query = format!(
            "SELECT {LOGO_COLUMNS} FROM company_logos WHERE section_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, CompanyLogo>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompanyLogo,
    ) -> Result<Option<CompanyLogo>, sqlx::Error> {
        let query = format!(
            "UPDATE company_logos SET
                company_name = COALESCE($2, company_name),
                logo = COALESCE($3, logo),
                alt_text = COALESCE($4, alt_text),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {LOGO_COLUMNS}"
        );
        sqlx::query_as::<_, CompanyLogo>(&query)
            .bind(id)
            .bind(&input.company_name)
            .bind(&input.logo)
            .bind(&input.alt_text)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM company_logos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct ManyMoreCompaniesRepo;

impl ManyMoreCompaniesRepo {
    /// Create or replace the block for a section.
    pub async fn upsert(
        pool: &PgPool,
        section_id: DbId,
        input: &UpsertManyMoreCompanies,
    ) -> Result<ManyMoreCompanies, sqlx::Error> {
        let query = format!(
            "INSERT INTO many_more_companies (section_id, additional_count, label, is_active)
             VALUES ($1, COALESCE($2, 40), COALESCE($3, 'Leading Companies'),
                     COALESCE($4, TRUE))
             ON CONFLICT (section_id) DO UPDATE SET
                additional_count = COALESCE($2, many_more_companies.additional_count),
                label = COALESCE($3, many_more_companies.label),
                is_active = COALESCE($4, many_more_companies.is_active),
                updated_at = NOW()
             RETURNING {MANY_MORE_COLUMNS}"
        );
        sqlx::query_as::<_, ManyMoreCompanies>(&query)
            .bind(section_id)
            .bind(input.additional_count)
            .bind(&input.label)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_active(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Option<ManyMoreCompanies>, sqlx::Error> {
        let query = format!(
            "SELECT {MANY_MORE_COLUMNS} FROM many_more_companies
             WHERE section_id = $1 AND is_active"
        );
        sqlx::query_as::<_, ManyMoreCompanies>(&query)
            .bind(section_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Option<ManyMoreCompanies>, sqlx::Error> {
        let query = format!(
            "SELECT {MANY_MORE_COLUMNS} FROM many_more_companies WHERE section_id = $1"
        );
        sqlx::query_as::<_, ManyMoreCompanies>(&query)
            .bind(section_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, section_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM many_more_companies WHERE section_id = $1")
            .bind(section_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
