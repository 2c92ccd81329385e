//! Integration tests for the course catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, expect_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_list_uses_data_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = expect_json(
        post_json(
            app.clone(),
            "/api/v1/admin/courses",
            json!({"title": "Data Analytics", "course_url": "data-analytics"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["title"], "Data Analytics");

    let listed = expect_json(get(app, "/api/v1/courses").await, StatusCode::OK).await;
    assert!(listed["data"].is_array());
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["course_url"], "data-analytics");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_empty_course_url(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/admin/courses",
        json!({"title": "No URL", "course_url": "  "}),
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_course_url_returns_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/admin/courses",
        json!({"title": "First", "course_url": "python"}),
    )
    .await;
    let response = post_json(
        app,
        "/api/v1/admin/courses",
        json!({"title": "Second", "course_url": "python"}),
    )
    .await;

    let json = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_returns_404_for_inactive_course(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/admin/courses",
        json!({"title": "Hidden", "course_url": "hidden", "is_active": false}),
    )
    .await;

    let response = get(app, "/api/v1/courses/hidden").await;
    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn child_create_takes_course_id_from_path(pool: PgPool) {
    let app = common::build_test_app(pool);

    let course = body_json(
        post_json(
            app.clone(),
            "/api/v1/admin/courses",
            json!({"title": "Excel", "course_url": "excel"}),
        )
        .await,
    )
    .await;
    let course_id = course["id"].as_i64().unwrap();

    // The payload carries no course_id; the URL decides.
    let highlight = expect_json(
        post_json(
            app.clone(),
            &format!("/api/v1/admin/courses/{course_id}/highlights"),
            json!({"title": "Live Classes"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(highlight["course_id"].as_i64().unwrap(), course_id);
    assert_eq!(highlight["icon_class"], "bi bi-code-slash");

    let detail = expect_json(get(app, "/api/v1/courses/excel").await, StatusCode::OK).await;
    assert_eq!(detail["data"]["highlights"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn outcome_create_rejects_unknown_color(pool: PgPool) {
    let app = common::build_test_app(pool);

    let course = body_json(
        post_json(
            app.clone(),
            "/api/v1/admin/courses",
            json!({"title": "SQL", "course_url": "sql"}),
        )
        .await,
    )
    .await;
    let course_id = course["id"].as_i64().unwrap();

    let response = post_json(
        app,
        &format!("/api/v1/admin/courses/{course_id}/learning-outcomes"),
        json!({"title": "Joins", "color": "turquoise"}),
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn highlight_create_rejects_unknown_icon(pool: PgPool) {
    let app = common::build_test_app(pool);

    let course = body_json(
        post_json(
            app.clone(),
            "/api/v1/admin/courses",
            json!({"title": "Power BI", "course_url": "power-bi"}),
        )
        .await,
    )
    .await;
    let course_id = course["id"].as_i64().unwrap();

    let response = post_json(
        app.clone(),
        &format!("/api/v1/admin/courses/{course_id}/highlights"),
        json!({"title": "Dashboards", "icon_class": "bi bi-made-up"}),
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // A listed icon is accepted.
    let response = post_json(
        app,
        &format!("/api/v1/admin/courses/{course_id}/highlights"),
        json!({"title": "Dashboards", "icon_class": "bi bi-bar-chart-steps"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let course = body_json(
        post_json(
            app.clone(),
            "/api/v1/admin/courses",
            json!({"title": "Azure", "course_url": "azure"}),
        )
        .await,
    )
    .await;
    let id = course["id"].as_i64().unwrap();

    let updated = expect_json(
        put_json(
            app.clone(),
            &format!("/api/v1/admin/courses/{id}"),
            json!({"subtitle": "Cloud foundations"}),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["subtitle"], "Cloud foundations");
    assert_eq!(updated["title"], "Azure");

    let response = delete(app.clone(), &format!("/api/v1/admin/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/admin/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn curriculum_month_create_under_course(pool: PgPool) {
    let app = common::build_test_app(pool);

    let course = body_json(
        post_json(
            app.clone(),
            "/api/v1/admin/courses",
            json!({"title": "Python", "course_url": "python"}),
        )
        .await,
    )
    .await;
    let course_id = course["id"].as_i64().unwrap();

    let month = expect_json(
        post_json(
            app.clone(),
            &format!("/api/v1/admin/courses/{course_id}/curriculum/months"),
            json!({"title": "Month 1"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(month["course_id"].as_i64().unwrap(), course_id);
    let month_id = month["id"].as_i64().unwrap();

    let section = expect_json(
        post_json(
            app.clone(),
            &format!("/api/v1/admin/curriculum/months/{month_id}/sections"),
            json!({"month_id": month_id, "title": "Basics"}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(section["course_id"].as_i64().unwrap(), course_id);

    let response = delete(app, &format!("/api/v1/admin/curriculum/months/{month_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn curriculum_create_under_missing_parent_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/admin/curriculum/months/9999/sections",
        json!({"month_id": 9999, "title": "Orphan"}),
    )
    .await;
    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let response = post_json(
        app,
        "/api/v1/admin/curriculum/sections/9999/topics",
        json!({"section_id": 9999, "title": "Orphan"}),
    )
    .await;
    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
