//! Integration tests for hero slides, advisors, placements, the
//! internship section, and the contact information block.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn hero_public_list_hides_inactive_slides(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/admin/hero-slides",
        json!({"title": "Learn Data Skills"}),
    )
    .await;
    post_json(
        app.clone(),
        "/api/v1/admin/hero-slides",
        json!({"title": "Old Banner", "is_active": false}),
    )
    .await;

    let public = expect_json(get(app, "/api/v1/hero-slides").await, StatusCode::OK).await;
    let slides = public["data"].as_array().unwrap();
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0]["title"], "Learn Data Skills");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advisor_bios_are_highlighted_at_serve_time(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/admin/advisors",
        json!({
            "name": "Dr. Meena Iyer",
            "bio_part1": "An expert in data analytics and mentoring.",
            "keywords_to_highlight": "data analytics"
        }),
    )
    .await;

    let public = expect_json(get(app.clone(), "/api/v1/advisors").await, StatusCode::OK).await;
    let advisor = &public["data"][0];
    assert_eq!(
        advisor["bio_part1"],
        "An expert in <span class=\"advisor-highlight\">data analytics</span> and mentoring."
    );
    // The raw keyword list is an admin-side concern.
    assert!(advisor.get("keywords_to_highlight").is_none());
    assert_eq!(advisor["has_more_content"], false);
    assert_eq!(advisor["title"], "Advisor & Mentor");

    // Admin sees the stored text untouched.
    let admin = expect_json(get(app, "/api/v1/admin/advisors").await, StatusCode::OK).await;
    assert_eq!(
        admin[0]["bio_part1"],
        "An expert in data analytics and mentoring."
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn placements_public_view_assembles_everything(pool: PgPool) {
    let app = common::build_test_app(pool);

    let section = expect_json(
        post_json(
            app.clone(),
            "/api/v1/admin/placements",
            json!({"companies_count": 50, "students_placed": 500, "sectors_count": 10}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let section_id = section["id"].as_i64().unwrap();

    post_json(
        app.clone(),
        &format!("/api/v1/admin/placements/{section_id}/logos"),
        json!({"company_name": "Infosys"}),
    )
    .await;
    put_json(
        app.clone(),
        &format!("/api/v1/admin/placements/{section_id}/many-more"),
        json!({"additional_count": 40}),
    )
    .await;

    let public = expect_json(get(app, "/api/v1/placements").await, StatusCode::OK).await;
    let view = &public["data"][0];
    assert_eq!(view["companies_display"], "50+");
    assert_eq!(view["company_logos"][0]["company_name"], "Infosys");
    assert_eq!(view["many_more"]["count_display"], "+40+");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_internship_section_is_a_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/admin/internship",
        json!({"title": "Internship Program"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app.clone(),
        "/api/v1/admin/internship",
        json!({"title": "Another One"}),
    )
    .await;
    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "CONFLICT");

    let public = expect_json(get(app, "/api/v1/internship").await, StatusCode::OK).await;
    assert_eq!(public["data"]["title"], "Internship Program");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn internship_public_view_is_null_when_unconfigured(pool: PgPool) {
    let app = common::build_test_app(pool);

    let public = expect_json(get(app, "/api/v1/internship").await, StatusCode::OK).await;
    assert!(public["data"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_info_upsert_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Nothing configured yet.
    let public = expect_json(get(app.clone(), "/api/v1/contact-info").await, StatusCode::OK).await;
    assert!(public["data"].is_null());

    put_json(
        app.clone(),
        "/api/v1/admin/contact-info",
        json!({
            "address": "Bengaluru",
            "phone": "+91 90000 00000",
            "email": "hello@yumelearning.com"
        }),
    )
    .await;
    put_json(
        app.clone(),
        "/api/v1/admin/contact-info",
        json!({
            "address": "Mysuru",
            "phone": "+91 90000 00001",
            "email": "hello@yumelearning.com"
        }),
    )
    .await;

    let public = expect_json(get(app, "/api/v1/contact-info").await, StatusCode::OK).await;
    assert_eq!(public["data"]["address"], "Mysuru");
}
