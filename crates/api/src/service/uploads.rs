//! Image storage for room listings.
//!
//! Files are written verbatim under `uploads/picture-room/images` beneath
//! the configured upload root, named by [`roomly_core::naming`] so the
//! owning room id and content digest are encoded in the name itself. No
//! deduplication or cleanup: re-uploading identical content overwrites the
//! same file, and deleting a room leaves its images behind.

use std::path::{Path, PathBuf};

use roomly_core::error::CoreError;
use roomly_core::naming::{image_file_name, is_safe_file_name};
use roomly_core::validation::{ErrorKind, ValidationErrors, FIELD_ROOM_ID};
use serde::Serialize;

use crate::error::AppError;

/// An uploaded file as received at the HTTP boundary.
#[derive(Debug)]
pub struct UploadedFile {
    /// The client-supplied file name, used only for its extension.
    pub original_name: String,
    pub bytes: Vec<u8>,
}

/// Per-file result of a successful upload batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// Name the file was stored (and is retrievable) under.
    pub file_name: String,
    pub size_bytes: u64,
}

/// The image directory beneath the upload root.
pub fn image_dir(upload_root: &Path) -> PathBuf {
    upload_root
        .join("uploads")
        .join("picture-room")
        .join("images")
}

/// Store a batch of uploaded files for `room_id`.
///
/// Creates the image directory on first use. The batch is written in order;
/// a failure part-way through surfaces as an error (files already written
/// stay on disk, matching the no-cleanup policy).
pub async fn store_files(
    upload_root: &Path,
    room_id: &str,
    files: Vec<UploadedFile>,
) -> Result<Vec<StoredFile>, AppError> {
    if room_id.trim().is_empty() {
        return Err(
            CoreError::from(ValidationErrors::single(FIELD_ROOM_ID, ErrorKind::NotNull)).into(),
        );
    }

    let dir = image_dir(upload_root);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create image dir: {e}")))?;

    let mut stored = Vec::with_capacity(files.len());
    for file in files {
        let file_name = image_file_name(room_id, &file.bytes, &file.original_name);
        let size_bytes = file.bytes.len() as u64;

        tokio::fs::write(dir.join(&file_name), &file.bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write {file_name}: {e}")))?;

        tracing::info!(%room_id, %file_name, size_bytes, "Stored image");
        stored.push(StoredFile {
            file_name,
            size_bytes,
        });
    }

    Ok(stored)
}

/// Read a stored image back by name, returning its bytes and content type.
///
/// Unsafe names (path separators, parent components) are rejected before
/// touching the filesystem; a missing file is a structured `NotFound`, not
/// an empty response.
pub async fn read_file(
    upload_root: &Path,
    file_name: &str,
) -> Result<(Vec<u8>, &'static str), AppError> {
    if !is_safe_file_name(file_name) {
        return Err(AppError::BadRequest(format!(
            "Invalid file name '{file_name}'"
        )));
    }

    let path = image_dir(upload_root).join(file_name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok((bytes, content_type_for(file_name))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CoreError::NotFound {
            entity: "StoredImage",
            id: file_name.to_string(),
        }
        .into()),
        Err(e) => Err(AppError::InternalError(format!(
            "Failed to read {file_name}: {e}"
        ))),
    }
}

/// Content type inferred from the stored file's extension.
fn content_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        // jpg/jpeg and anything unrecognized serve as JPEG, matching the
        // legacy endpoint's fixed content type.
        _ => "image/jpeg",
    }
}
