//! Integration tests for admin media uploads.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, test_config};
use sqlx::PgPool;
use tower::ServiceExt;

const BOUNDARY: &str = "----test-boundary";

/// Minimal PNG signature; format sniffing only needs the magic bytes.
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn multipart_body(field: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(field: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/admin/uploads")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field, filename, bytes)))
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn png_upload_is_stored_and_served_path_returned(pool: PgPool) {
    let media_dir = tempfile::tempdir().unwrap();
    let mut config = test_config();
    config.media_root = media_dir.path().to_string_lossy().into_owned();
    let app = common::build_test_app_with_config(pool, config);

    let response = app
        .oneshot(upload_request("file", "logo.png", PNG_MAGIC))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let path = json["data"]["path"].as_str().unwrap();
    assert!(path.starts_with("/media/"));
    assert!(path.ends_with(".png"));
    assert_eq!(json["data"]["size_bytes"].as_u64().unwrap(), 8);

    // The file landed in the media root under its generated name.
    let name = path.trim_start_matches("/media/");
    let stored = media_dir.path().join(name);
    assert_eq!(std::fs::read(stored).unwrap(), PNG_MAGIC);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_image_upload_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(upload_request("file", "notes.txt", b"just some text"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_file_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = app
        .oneshot(upload_request("attachment", "logo.png", PNG_MAGIC))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
