//! Handlers for room image upload and retrieval.

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::service::uploads::{self, StoredFile, UploadedFile};
use crate::state::AppState;

/// Response for an upload batch.
#[derive(Debug, Serialize)]
pub struct UploadFilesResponse {
    pub files: Vec<StoredFile>,
}

/// POST /api/upload/images
///
/// Multipart form: repeated `files` parts plus a `roomId` text field.
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadFilesResponse>> {
    let mut room_id = String::new();
    let mut files: Vec<UploadedFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "files" => {
                let original_name = field.file_name().unwrap_or("image.jpg").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                files.push(UploadedFile {
                    original_name,
                    bytes: bytes.to_vec(),
                });
            }
            "roomId" => {
                room_id = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            _ => {} // ignore unknown fields
        }
    }

    if files.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required 'files' field".into(),
        ));
    }

    let stored = uploads::store_files(&state.config.upload_root, &room_id, files).await?;
    Ok(Json(UploadFilesResponse { files: stored }))
}

/// GET /api/upload/files/{file_name}
///
/// Serves the raw image bytes with a content type inferred from the name.
pub async fn get_file(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> AppResult<([(header::HeaderName, &'static str); 1], Vec<u8>)> {
    let (bytes, content_type) = uploads::read_file(&state.config.upload_root, &file_name).await?;
    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}
