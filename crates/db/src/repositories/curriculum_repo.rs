//! Repositories for the curriculum hierarchy (months, sections,
//! topics) and assembly of the nested tree the course page renders.
//!
//! Sections and topics denormalize `course_id`. When a create DTO omits
//! it, the insert resolves it from the parent row in SQL so the two can
//! never drift apart at creation time.

use sqlx::PgPool;
use yume_core::types::DbId;

use crate::models::curriculum::{
    CreateCurriculumMonth, CreateCurriculumSection, CreateCurriculumTopic, CurriculumMonth,
    CurriculumMonthView, CurriculumSection, CurriculumSectionView, CurriculumTopic,
    UpdateCurriculumMonth, UpdateCurriculumSection, UpdateCurriculumTopic,
};

const MONTH_COLUMNS: &str = "id, course_id, title, subtitle, meta_info, badge_color, \
                             sort_order, is_active, created_at, updated_at";
const SECTION_COLUMNS: &str = "id, month_id, course_id, title, sort_order, created_at, updated_at";
const TOPIC_COLUMNS: &str = "id, section_id, course_id, title, sort_order, created_at, updated_at";

pub struct CurriculumMonthRepo;

impl CurriculumMonthRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCurriculumMonth,
    ) -> Result<CurriculumMonth, sqlx::Error> {
        let query = format!(
            "INSERT INTO curriculum_months (course_id, title, subtitle, meta_info, badge_color,
                                            sort_order, is_active)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, 'primary'),
                     COALESCE($6, 0), COALESCE($7, TRUE))
             RETURNING {MONTH_COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumMonth>(&query)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.meta_info)
            .bind(&input.badge_color)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<CurriculumMonth>, sqlx::Error> {
        let query = format!("SELECT {MONTH_COLUMNS} FROM curriculum_months WHERE id = $1");
        sqlx::query_as::<_, CurriculumMonth>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CurriculumMonth>, sqlx::Error> {
        let query = format!(
            "SELECT {MONTH_COLUMNS} FROM curriculum_months WHERE course_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, CurriculumMonth>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCurriculumMonth,
    ) -> Result<Option<CurriculumMonth>, sqlx::Error> {
        let query = format!(
            "UPDATE curriculum_months SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                meta_info = COALESCE($4, meta_info),
                badge_color = COALESCE($5, badge_color),
                sort_order = COALESCE($6, sort_order),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {MONTH_COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumMonth>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.meta_info)
            .bind(&input.badge_color)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM curriculum_months WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Build the nested month -> section -> topic tree for a course,
    /// active months only, everything in display order. Three queries,
    /// grouped in memory.
    pub async fn tree_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CurriculumMonthView>, sqlx::Error> {
        let months_query = format!(
            "SELECT {MONTH_COLUMNS} FROM curriculum_months
             WHERE course_id = $1 AND is_active
             ORDER BY sort_order ASC, id ASC"
        );
        let months = sqlx::query_as::<_, CurriculumMonth>(&months_query)
            .bind(course_id)
            .fetch_all(pool)
            .await?;

        let sections_query = format!(
            "SELECT {SECTION_COLUMNS} FROM curriculum_sections
             WHERE course_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        let sections = sqlx::query_as::<_, CurriculumSection>(&sections_query)
            .bind(course_id)
            .fetch_all(pool)
            .await?;

        let topics_query = format!(
            "SELECT {TOPIC_COLUMNS} FROM curriculum_topics
             WHERE course_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        let mut topics = sqlx::query_as::<_, CurriculumTopic>(&topics_query)
            .bind(course_id)
            .fetch_all(pool)
            .await?;

        let mut section_views: Vec<CurriculumSectionView> = sections
            .into_iter()
            .map(|section| CurriculumSectionView {
                section,
                topics: Vec::new(),
            })
            .collect();
        for topic in topics.drain(..) {
            if let Some(view) = section_views
                .iter_mut()
                .find(|v| v.section.id == topic.section_id)
            {
                view.topics.push(topic);
            }
        }

        let mut month_views: Vec<CurriculumMonthView> = months
            .into_iter()
            .map(|month| CurriculumMonthView {
                month,
                sections: Vec::new(),
            })
            .collect();
        for view in section_views {
            if let Some(month) = month_views
                .iter_mut()
                .find(|m| m.month.id == view.section.month_id)
            {
                month.sections.push(view);
            }
        }

        Ok(month_views)
    }
}

pub struct CurriculumSectionRepo;

impl CurriculumSectionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCurriculumSection,
    ) -> Result<CurriculumSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO curriculum_sections (month_id, course_id, title, sort_order)
             VALUES ($1,
                     COALESCE($2, (SELECT course_id FROM curriculum_months WHERE id = $1)),
                     $3, COALESCE($4, 0))
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumSection>(&query)
            .bind(input.month_id)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<CurriculumSection>, sqlx::Error> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM curriculum_sections WHERE id = $1");
        sqlx::query_as::<_, CurriculumSection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_month(
        pool: &PgPool,
        month_id: DbId,
    ) -> Result<Vec<CurriculumSection>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM curriculum_sections WHERE month_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, CurriculumSection>(&query)
            .bind(month_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCurriculumSection,
    ) -> Result<Option<CurriculumSection>, sqlx::Error> {
        let query = format!(
            "UPDATE curriculum_sections SET
                title = COALESCE($2, title),
                sort_order = COALESCE($3, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumSection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM curriculum_sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct CurriculumTopicRepo;

impl CurriculumTopicRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCurriculumTopic,
    ) -> Result<CurriculumTopic, sqlx::Error> {
        let query = format!(
            "INSERT INTO curriculum_topics (section_id, course_id, title, sort_order)
             VALUES ($1,
                     COALESCE($2, (SELECT course_id FROM curriculum_sections WHERE id = $1)),
                     $3, COALESCE($4, 0))
             RETURNING {TOPIC_COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumTopic>(&query)
            .bind(input.section_id)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<CurriculumTopic>, sqlx::Error> {
        let query = format!(
            "SELECT {TOPIC_COLUMNS} FROM curriculum_topics WHERE section_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, CurriculumTopic>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCurriculumTopic,
    ) -> Result<Option<CurriculumTopic>, sqlx::Error> {
        let query = format!(
            "UPDATE curriculum_topics SET
                title = COALESCE($2, title),
                sort_order = COALESCE($3, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {TOPIC_COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumTopic>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM curriculum_topics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
