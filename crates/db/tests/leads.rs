//! Integration tests for lead storage: contact messages, enrollments,
//! and enquiries.

use sqlx::PgPool;
use yume_db::models::lead::{CreateContactMessage, CreateEnquiry, CreateEnrollment};
use yume_db::repositories::{ContactMessageRepo, EnquiryRepo, EnrollmentRepo};

fn contact(first_name: &str) -> CreateContactMessage {
    CreateContactMessage {
        first_name: first_name.to_string(),
        last_name: "Kumar".to_string(),
        phone: "9000000000".to_string(),
        email: "test@example.com".to_string(),
        message: "Please call me back.".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_messages_list_newest_first(pool: PgPool) {
    ContactMessageRepo::create(&pool, &contact("First")).await.unwrap();
    ContactMessageRepo::create(&pool, &contact("Second")).await.unwrap();

    let messages = ContactMessageRepo::list(&pool).await.unwrap();
    assert_eq!(messages.len(), 2);
    // Same timestamp resolution: the id tiebreaker keeps newest first.
    assert_eq!(messages[0].first_name, "Second");
    assert_eq!(messages[1].first_name, "First");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enrollment_round_trip(pool: PgPool) {
    let created = EnrollmentRepo::create(
        &pool,
        &CreateEnrollment {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9111111111".to_string(),
            education: "btech".to_string(),
            course: "data-analytics".to_string(),
        },
    )
    .await
    .unwrap();

    let listed = EnrollmentRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].education, "btech");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enquiry_round_trip(pool: PgPool) {
    EnquiryRepo::create(
        &pool,
        &CreateEnquiry {
            first_name: "Vikram".to_string(),
            last_name: "S".to_string(),
            email: "vikram@example.com".to_string(),
            mobile: "9222222222".to_string(),
            message: "Do you offer weekend batches?".to_string(),
        },
    )
    .await
    .unwrap();

    let listed = EnquiryRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].message, "Do you offer weekend batches?");
}
