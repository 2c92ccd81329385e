//! Integration tests for the public lead-capture forms.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_submission_persists_one_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = expect_json(
        post_json(
            app.clone(),
            "/api/v1/contact",
            json!({
                "first_name": "Asha",
                "last_name": "Rao",
                "phone": "9000000000",
                "email": "asha@example.com",
                "message": "Please call me back."
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(body["success"], true);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);

    let listed = expect_json(
        get(app, "/api/v1/admin/leads/contact-messages").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["first_name"], "Asha");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_email_fails_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = expect_json(
        post_json(
            app,
            "/api/v1/contact",
            json!({
                "first_name": "Asha",
                "last_name": "Rao",
                "phone": "9000000000",
                "email": "not-an-email",
                "message": "Hello"
            }),
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("a valid email is required"));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_failure_reports_generic_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    // Closing the pool makes the insert fail after validation passes.
    pool.close().await;

    let body = expect_json(
        post_json(
            app,
            "/api/v1/contact",
            json!({
                "first_name": "Asha",
                "last_name": "Rao",
                "phone": "9000000000",
                "email": "asha@example.com",
                "message": "Please call me back."
            }),
        )
        .await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Unable to submit right now, please try again later"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enrollment_accepts_known_choices(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = expect_json(
        post_json(
            app.clone(),
            "/api/v1/enroll",
            json!({
                "first_name": "Vikram",
                "last_name": "S",
                "email": "vikram@example.com",
                "mobile": "9111111111",
                "education": "btech",
                "course": "Python Development"
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(body["success"], true);

    let listed = expect_json(
        get(app, "/api/v1/admin/leads/enrollments").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(listed[0]["course"], "Python Development");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enrollment_rejects_unknown_education(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = expect_json(
        post_json(
            app,
            "/api/v1/enroll",
            json!({
                "first_name": "Vikram",
                "last_name": "S",
                "email": "vikram@example.com",
                "mobile": "9111111111",
                "education": "phd",
                "course": "Python Development"
            }),
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body["success"], false);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM enrollments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enrollment_rejects_unknown_course(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = expect_json(
        post_json(
            app,
            "/api/v1/enroll",
            json!({
                "first_name": "Vikram",
                "last_name": "S",
                "email": "vikram@example.com",
                "mobile": "9111111111",
                "education": "btech",
                "course": "Basket Weaving"
            }),
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body["success"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enquiry_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = expect_json(
        post_json(
            app.clone(),
            "/api/v1/enquiry",
            json!({
                "first_name": "Divya",
                "last_name": "N",
                "email": "divya@example.com",
                "mobile": "9222222222",
                "message": "Do you offer weekend batches?"
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(body["success"], true);

    let listed = expect_json(
        get(app, "/api/v1/admin/leads/enquiries").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(listed[0]["message"], "Do you offer weekend batches?");
}
