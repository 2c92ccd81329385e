//! Integration tests for the project card and detail page endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, expect_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_card(app: axum::Router, name: &str) -> serde_json::Value {
    expect_json(
        post_json(app, "/api/v1/admin/projects", json!({"project_name": name})).await,
        StatusCode::CREATED,
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_carries_null_detail_until_one_exists(pool: PgPool) {
    let app = common::build_test_app(pool);

    let card = create_card(app.clone(), "AI Internship Program").await;
    assert_eq!(card["slug"], "ai-internship-program");

    let page = expect_json(
        get(app, "/api/v1/projects/ai-internship-program").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(page["data"]["project_name"], "AI Internship Program");
    assert!(page["data"]["detail"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_replace_hydrates_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);

    let card = create_card(app.clone(), "ITC Program").await;
    let id = card["id"].as_i64().unwrap();

    // Empty payload: scalar defaults plus default slot groups.
    let detail = expect_json(
        put_json(app.clone(), &format!("/api/v1/admin/projects/{id}/detail"), json!({})).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(detail["badge_text"], "Skill Development Program");

    let page = expect_json(
        get(app, &format!("/api/v1/projects/{}", card["slug"].as_str().unwrap())).await,
        StatusCode::OK,
    )
    .await;
    let view = &page["data"]["detail"];
    assert_eq!(view["partners"].as_array().unwrap().len(), 3);
    assert_eq!(view["role_items"].as_array().unwrap().len(), 4);
    assert_eq!(view["student_count_display"], "300+");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_replace_for_unknown_card_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = put_json(app, "/api/v1/admin/projects/9999/detail", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_card_page_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let card = body_json(
        post_json(
            app.clone(),
            "/api/v1/admin/projects",
            json!({"project_name": "Archived", "is_active": false}),
        )
        .await,
    )
    .await;

    let response = get(
        app,
        &format!("/api/v1/projects/{}", card["slug"].as_str().unwrap()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_delete_keeps_the_card(pool: PgPool) {
    let app = common::build_test_app(pool);

    let card = create_card(app.clone(), "Keep Me").await;
    let id = card["id"].as_i64().unwrap();

    put_json(app.clone(), &format!("/api/v1/admin/projects/{id}/detail"), json!({})).await;

    let response = delete(app.clone(), &format!("/api/v1/admin/projects/{id}/detail")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/admin/projects/{id}/detail")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, &format!("/api/v1/admin/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
