//! Tests for image storage: service-level round trips and the HTTP
//! multipart boundary.

mod common;

use assert_matches::assert_matches;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_bytes, body_json, build_test_app_with, test_config};
use roomly_api::error::AppError;
use roomly_api::service::rooms::UpdateGuard;
use roomly_api::service::uploads::{self, UploadedFile};
use roomly_core::error::CoreError;
use sqlx::PgPool;
use tower::ServiceExt;

fn uploaded(name: &str, bytes: &[u8]) -> UploadedFile {
    UploadedFile {
        original_name: name.to_string(),
        bytes: bytes.to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Storage service
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_store_and_read_round_trip() {
    let root = tempfile::tempdir().unwrap();

    let stored = uploads::store_files(
        root.path(),
        "R1",
        vec![uploaded("kitchen.png", b"png-bytes")],
    )
    .await
    .unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].file_name.starts_with("R1-"));
    assert_eq!(stored[0].size_bytes, 9);

    let (bytes, content_type) = uploads::read_file(root.path(), &stored[0].file_name)
        .await
        .unwrap();
    assert_eq!(bytes, b"png-bytes");
    assert_eq!(content_type, "image/png");
}

#[tokio::test]
async fn test_identical_content_stores_under_same_name() {
    let root = tempfile::tempdir().unwrap();

    let first = uploads::store_files(root.path(), "R1", vec![uploaded("a.jpg", b"same")])
        .await
        .unwrap();
    let second = uploads::store_files(root.path(), "R1", vec![uploaded("b.jpg", b"same")])
        .await
        .unwrap();

    assert_eq!(first[0].file_name, second[0].file_name);
}

#[tokio::test]
async fn test_store_batch_of_two_files() {
    let root = tempfile::tempdir().unwrap();

    let stored = uploads::store_files(
        root.path(),
        "R1",
        vec![uploaded("a.jpg", b"one"), uploaded("b.jpg", b"two")],
    )
    .await
    .unwrap();

    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0].file_name, stored[1].file_name);
}

#[tokio::test]
async fn test_store_with_empty_room_id_is_rejected() {
    let root = tempfile::tempdir().unwrap();

    let err = uploads::store_files(root.path(), "  ", vec![uploaded("a.jpg", b"x")])
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}

#[tokio::test]
async fn test_read_missing_file_is_not_found() {
    let root = tempfile::tempdir().unwrap();

    let err = uploads::read_file(root.path(), "R1-none.jpg").await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "StoredImage", .. }));
}

#[tokio::test]
async fn test_read_rejects_path_traversal() {
    let root = tempfile::tempdir().unwrap();

    let err = uploads::read_file(root.path(), "../secrets.txt").await.unwrap_err();
    assert_matches!(err, AppError::BadRequest(_));
}

// ---------------------------------------------------------------------------
// HTTP boundary
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "test-boundary";

/// Hand-rolled multipart body with a `roomId` field and one `files` part.
fn multipart_body(room_id: &str, file_name: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"roomId\"\r\n\r\n{room_id}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; \
             filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_then_fetch_over_http(pool: PgPool) {
    let root = tempfile::tempdir().unwrap();
    let config = test_config(root.path().to_path_buf(), UpdateGuard::Strict);

    let app = build_test_app_with(pool.clone(), config.clone());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/upload/images")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body("R1", "kitchen.png", b"png-bytes")))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let file_name = json["files"][0]["fileName"].as_str().unwrap().to_string();
    assert!(file_name.starts_with("R1-"));
    assert_eq!(json["files"][0]["sizeBytes"], 9);

    let app = build_test_app_with(pool, config);
    let request = Request::builder()
        .method(Method::GET)
        .uri(format!("/api/upload/files/{file_name}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "image/png"
    );
    assert_eq!(body_bytes(response).await, b"png-bytes");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_without_files_is_bad_request(pool: PgPool) {
    let root = tempfile::tempdir().unwrap();
    let app = build_test_app_with(pool, test_config(root.path().to_path_buf(), UpdateGuard::Strict));

    let mut body = Vec::new();
    body.extend_from_slice(
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"roomId\"\r\n\r\nR1\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/upload/images")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fetch_missing_file_returns_404(pool: PgPool) {
    let root = tempfile::tempdir().unwrap();
    let app = build_test_app_with(pool, test_config(root.path().to_path_buf(), UpdateGuard::Strict));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/upload/files/R1-nothing.jpg")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
