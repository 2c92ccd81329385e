//! Repositories for the per-course child collections: highlights,
//! learning outcomes, tools, certification points, FAQs, and career
//! opportunity cards. Each is plain CRUD scoped by `course_id`.

use sqlx::PgPool;
use yume_core::types::DbId;

use crate::models::course::{
    CourseCareerOpportunity, CourseCertificationPoint, CourseFaq, CourseHighlight,
    CourseLearningOutcome, CourseTool, CreateCourseCareerOpportunity,
    CreateCourseCertificationPoint, CreateCourseFaq, CreateCourseHighlight,
    CreateCourseLearningOutcome, CreateCourseTool, UpdateCourseCareerOpportunity,
    UpdateCourseCertificationPoint, UpdateCourseFaq, UpdateCourseHighlight,
    UpdateCourseLearningOutcome, UpdateCourseTool,
};

pub struct CourseHighlightRepo;

impl CourseHighlightRepo {
    const COLUMNS: &'static str =
        "id, course_id, icon_class, title, description, sort_order, is_active, \
         created_at, updated_at";

    pub async fn create(
        pool: &PgPool,
        input: &CreateCourseHighlight,
    ) -> Result<CourseHighlight, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_highlights (course_id, icon_class, title, description,
                                            sort_order, is_active)
             VALUES ($1, COALESCE($2, 'bi bi-code-slash'), $3, COALESCE($4, ''),
                     COALESCE($5, 0), COALESCE($6, TRUE))
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseHighlight>(&query)
            .bind(input.course_id)
            .bind(&input.icon_class)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CourseHighlight>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM course_highlights WHERE course_id = $1 AND is_active
             ORDER BY sort_order ASC, id ASC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseHighlight>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CourseHighlight>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM course_highlights WHERE course_id = $1
             ORDER BY sort_order ASC, id ASC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseHighlight>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourseHighlight,
    ) -> Result<Option<CourseHighlight>, sqlx::Error> {
        let query = format!(
            "UPDATE course_highlights SET
                icon_class = COALESCE($2, icon_class),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                sort_order = COALESCE($5, sort_order),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseHighlight>(&query)
            .bind(id)
            .bind(&input.icon_class)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course_highlights WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct CourseLearningOutcomeRepo;

impl CourseLearningOutcomeRepo {
    const COLUMNS: &'static str =
        "id, course_id, title, description, color, sort_order, created_at, updated_at";

    pub async fn create(
        pool: &PgPool,
        input: &CreateCourseLearningOutcome,
    ) -> Result<CourseLearningOutcome, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_learning_outcomes (course_id, title, description, color,
                                                   sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'primary'), COALESCE($5, 0))
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseLearningOutcome>(&query)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CourseLearningOutcome>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM course_learning_outcomes WHERE course_id = $1
             ORDER BY sort_order ASC, id ASC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseLearningOutcome>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourseLearningOutcome,
    ) -> Result<Option<CourseLearningOutcome>, sqlx::Error> {
        let query = format!(
            "UPDATE course_learning_outcomes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                color = COALESCE($4, color),
                sort_order = COALESCE($5, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseLearningOutcome>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course_learning_outcomes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct CourseToolRepo;

impl CourseToolRepo {
    const COLUMNS: &'static str =
        "id, course_id, name, description, color, sort_order, created_at, updated_at";

    pub async fn create(
        pool: &PgPool,
        input: &CreateCourseTool,
    ) -> Result<CourseTool, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_tools (course_id, name, description, color, sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'primary'), COALESCE($5, 0))
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseTool>(&query)
            .bind(input.course_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool, course_id: DbId) -> Result<Vec<CourseTool>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM course_tools WHERE course_id = $1 ORDER BY sort_order ASC, id ASC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseTool>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourseTool,
    ) -> Result<Option<CourseTool>, sqlx::Error> {
        let query = format!(
            "UPDATE course_tools SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                color = COALESCE($4, color),
                sort_order = COALESCE($5, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseTool>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course_tools WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct CourseCertificationPointRepo;

impl CourseCertificationPointRepo {
    const COLUMNS: &'static str = "id, course_id, text, sort_order, created_at, updated_at";

    pub async fn create(
        pool: &PgPool,
        input: &CreateCourseCertificationPoint,
    ) -> Result<CourseCertificationPoint, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_certification_points (course_id, text, sort_order)
             VALUES ($1, $2, COALESCE($3, 0))
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseCertificationPoint>(&query)
            .bind(input.course_id)
            .bind(&input.text)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CourseCertificationPoint>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM course_certification_points WHERE course_id = $1
             ORDER BY sort_order ASC, id ASC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseCertificationPoint>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourseCertificationPoint,
    ) -> Result<Option<CourseCertificationPoint>, sqlx::Error> {
        let query = format!(
            "UPDATE course_certification_points SET
                text = COALESCE($2, text),
                sort_order = COALESCE($3, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseCertificationPoint>(&query)
            .bind(id)
            .bind(&input.text)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course_certification_points WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct CourseFaqRepo;

impl CourseFaqRepo {
    const COLUMNS: &'static str =
        "id, course_id, question, answer, sort_order, created_at, updated_at";

    pub async fn create(pool: &PgPool, input: &CreateCourseFaq) -> Result<CourseFaq, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_faqs (course_id, question, answer, sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 0))
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseFaq>(&query)
            .bind(input.course_id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool, course_id: DbId) -> Result<Vec<CourseFaq>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM course_faqs WHERE course_id = $1 ORDER BY sort_order ASC, id ASC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseFaq>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourseFaq,
    ) -> Result<Option<CourseFaq>, sqlx::Error> {
        let query = format!(
            "UPDATE course_faqs SET
                question = COALESCE($2, question),
                answer = COALESCE($3, answer),
                sort_order = COALESCE($4, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseFaq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course_faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct CourseCareerOpportunityRepo;

impl CourseCareerOpportunityRepo {
    const COLUMNS: &'static str =
        "id, course_id, title, description, tag, icon_type, sort_order, created_at, updated_at";

    pub async fn create(
        pool: &PgPool,
        input: &CreateCourseCareerOpportunity,
    ) -> Result<CourseCareerOpportunity, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_career_opportunities (course_id, title, description, tag,
                                                      icon_type, sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, 'data'),
                     COALESCE($6, 0))
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseCareerOpportunity>(&query)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.tag)
            .bind(&input.icon_type)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CourseCareerOpportunity>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM course_career_opportunities WHERE course_id = $1
             ORDER BY sort_order ASC, id ASC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseCareerOpportunity>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourseCareerOpportunity,
    ) -> Result<Option<CourseCareerOpportunity>, sqlx::Error> {
        let query = format!(
            "UPDATE course_career_opportunities SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                tag = COALESCE($4, tag),
                icon_type = COALESCE($5, icon_type),
                sort_order = COALESCE($6, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, CourseCareerOpportunity>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.tag)
            .bind(&input.icon_type)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course_career_opportunities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
