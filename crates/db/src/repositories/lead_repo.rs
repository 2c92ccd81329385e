//! Append-only repositories for the three lead types. Rows are created
//! by public form submissions and listed newest-first for admins.

use sqlx::PgPool;

use crate::models::lead::{
    ContactMessage, CreateContactMessage, CreateEnquiry, CreateEnrollment, Enquiry, Enrollment,
};

pub struct ContactMessageRepo;

impl ContactMessageRepo {
    const COLUMNS: &'static str =
        "id, first_name, last_name, phone, email, message, submitted_at";

    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (first_name, last_name, phone, email, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM contact_messages ORDER BY submitted_at DESC, id DESC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, ContactMessage>(&query).fetch_all(pool).await
    }
}

pub struct EnrollmentRepo;

impl EnrollmentRepo {
    const COLUMNS: &'static str =
        "id, first_name, last_name, email, mobile, education, course, created_at";

    pub async fn create(
        pool: &PgPool,
        input: &CreateEnrollment,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (first_name, last_name, email, mobile, education, course)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.mobile)
            .bind(&input.education)
            .bind(&input.course)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM enrollments ORDER BY created_at DESC, id DESC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, Enrollment>(&query).fetch_all(pool).await
    }
}

pub struct EnquiryRepo;

impl EnquiryRepo {
    const COLUMNS: &'static str =
        "id, first_name, last_name, email, mobile, message, created_at";

    pub async fn create(pool: &PgPool, input: &CreateEnquiry) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO enquiries (first_name, last_name, email, mobile, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            Self::COLUMNS
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.mobile)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Enquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM enquiries ORDER BY created_at DESC, id DESC",
            Self::COLUMNS
        );
        sqlx::query_as::<_, Enquiry>(&query).fetch_all(pool).await
    }
}
