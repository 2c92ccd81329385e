//! Handler for admin media uploads.
//!
//! Accepted files are stored under the configured media root with a
//! random name and served back at `/media/{name}`. Only raster image
//! formats the frontend can display are accepted, and the format is
//! sniffed from the bytes rather than trusted from the filename.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use image::ImageFormat;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Metadata returned for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    /// Public URL path, e.g. `/media/3f2a....png`.
    pub path: String,
    pub size_bytes: usize,
}

/// POST /api/v1/admin/uploads
///
/// Expects a multipart body with a single `file` field containing a
/// PNG, JPEG, or WebP image.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadedFile>>)> {
    let mut bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
            bytes = Some(data.to_vec());
            break;
        }
    }

    let bytes = bytes.ok_or_else(|| AppError::BadRequest("Missing 'file' field".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    let extension = match image::guess_format(&bytes) {
        Ok(ImageFormat::Png) => "png",
        Ok(ImageFormat::Jpeg) => "jpg",
        Ok(ImageFormat::WebP) => "webp",
        _ => {
            return Err(AppError::BadRequest(
                "Only PNG, JPEG, and WebP images are accepted".to_string(),
            ))
        }
    };

    let name = format!("{}.{extension}", Uuid::new_v4());
    let dest = std::path::Path::new(&state.config.media_root).join(&name);
    tokio::fs::write(&dest, &bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(file = %name, size = bytes.len(), "stored media upload");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadedFile {
                path: format!("/media/{name}"),
                size_bytes: bytes.len(),
            },
        }),
    ))
}
