//! Route definitions for image upload and retrieval.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/api/upload`.
///
/// ```text
/// POST /images             multipart `files` + `roomId`
/// GET  /files/{file_name}  raw image bytes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/images", post(upload::upload_images))
        .route("/files/{file_name}", get(upload::get_file))
}
