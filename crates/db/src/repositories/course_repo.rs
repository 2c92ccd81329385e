//! Repository for the `courses` table, plus course detail assembly.

use sqlx::PgPool;
use yume_core::types::DbId;

use crate::models::course::{Course, CourseDetail, CreateCourse, UpdateCourse};
use crate::repositories::course_content_repo::{
    CourseCareerOpportunityRepo, CourseCertificationPointRepo, CourseFaqRepo,
    CourseHighlightRepo, CourseLearningOutcomeRepo, CourseToolRepo,
};
use crate::repositories::curriculum_repo::CurriculumMonthRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, card_description, image, subtitle, overview, duration, \
                       total_hours, level, format, whatsapp_number, contact_number, course_url, \
                       sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations and the detail-page view for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (title, card_description, image, subtitle, overview, duration,
                                  total_hours, level, format, whatsapp_number, contact_number,
                                  course_url, sort_order, is_active)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, ''),
                     COALESCE($6, ''), COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, ''),
                     COALESCE($10, ''), COALESCE($11, ''), $12, COALESCE($13, 0),
                     COALESCE($14, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(&input.card_description)
            .bind(&input.image)
            .bind(&input.subtitle)
            .bind(&input.overview)
            .bind(&input.duration)
            .bind(&input.total_hours)
            .bind(&input.level)
            .bind(&input.format)
            .bind(&input.whatsapp_number)
            .bind(&input.contact_number)
            .bind(&input.course_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List active courses in display order (ties newest-first).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses WHERE is_active
             ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// List all courses, including inactive ones (admin listing).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Find a course by its internal ID (any active state).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active course by its public URL key.
    pub async fn find_by_url_active(
        pool: &PgPool,
        course_url: &str,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE course_url = $1 AND is_active");
        sqlx::query_as::<_, Course>(&query)
            .bind(course_url)
            .fetch_optional(pool)
            .await
    }

    /// Update a course. Only non-`None` fields in `input` are applied.
    /// The URL key never changes.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                title = COALESCE($2, title),
                card_description = COALESCE($3, card_description),
                image = COALESCE($4, image),
                subtitle = COALESCE($5, subtitle),
                overview = COALESCE($6, overview),
                duration = COALESCE($7, duration),
                total_hours = COALESCE($8, total_hours),
                level = COALESCE($9, level),
                format = COALESCE($10, format),
                whatsapp_number = COALESCE($11, whatsapp_number),
                contact_number = COALESCE($12, contact_number),
                sort_order = COALESCE($13, sort_order),
                is_active = COALESCE($14, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.card_description)
            .bind(&input.image)
            .bind(&input.subtitle)
            .bind(&input.overview)
            .bind(&input.duration)
            .bind(&input.total_hours)
            .bind(&input.level)
            .bind(&input.format)
            .bind(&input.whatsapp_number)
            .bind(&input.contact_number)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course. Children cascade. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assemble the public detail page for an active course: the course
    /// row with every child collection and the nested curriculum tree.
    pub async fn detail_by_url(
        pool: &PgPool,
        course_url: &str,
    ) -> Result<Option<CourseDetail>, sqlx::Error> {
        let Some(course) = Self::find_by_url_active(pool, course_url).await? else {
            return Ok(None);
        };

        let highlights = CourseHighlightRepo::list_active(pool, course.id).await?;
        let curriculum = CurriculumMonthRepo::tree_for_course(pool, course.id).await?;
        let learning_outcomes = CourseLearningOutcomeRepo::list(pool, course.id).await?;
        let tools = CourseToolRepo::list(pool, course.id).await?;
        let certification_points = CourseCertificationPointRepo::list(pool, course.id).await?;
        let faqs = CourseFaqRepo::list(pool, course.id).await?;
        let career_opportunities = CourseCareerOpportunityRepo::list(pool, course.id).await?;

        Ok(Some(CourseDetail {
            course,
            highlights,
            curriculum,
            learning_outcomes,
            tools,
            certification_points,
            faqs,
            career_opportunities,
        }))
    }
}
