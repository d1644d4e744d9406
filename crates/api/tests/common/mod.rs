//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt::oneshot` to send requests directly to
//! the router without a TCP listener, mirroring the production router
//! construction in `main.rs`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use roomly_api::config::ServerConfig;
use roomly_api::routes;
use roomly_api::service::rooms::UpdateGuard;
use roomly_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_root: PathBuf, update_guard: UpdateGuard) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_root,
        update_guard,
    }
}

/// Build the application router with the default (strict) configuration.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config(std::env::temp_dir(), UpdateGuard::Strict))
}

/// Build the application router with an explicit configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .nest("/api/upload", routes::upload::router())
        .with_state(state)
}

/// Seed one record in each lookup table: P1, A1, S1, U1.
pub async fn seed_lookups(pool: &PgPool) {
    sqlx::query(
        "INSERT INTO price_ranges (id, name, price_min, price_max) VALUES ('P1', '100-200', 100, 200)",
    )
    .execute(pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO acreage_ranges (id, name, acreage_min, acreage_max) VALUES ('A1', '20-40', 20, 40)",
    )
    .execute(pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO streets (id, name) VALUES ('S1', 'Elm St')")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO accounts (id, username, full_name) VALUES ('U1', 'owner', 'Owner One')")
        .execute(pool)
        .await
        .unwrap();
}

/// A complete, resolvable room payload for the seeded lookups.
pub fn elm_street_payload() -> serde_json::Value {
    serde_json::json!({
        "room": {
            "address": "12 Elm St",
            "description": "Sunny corner room",
            "priceMin": 100,
            "priceMax": 200,
            "acreageMin": 20.0,
            "acreageMax": 40.0,
            "priceRage": {"id": "P1"},
            "acreageRange": {"id": "A1"},
            "street": {"id": "S1"},
            "account": {"id": "U1"}
        }
    })
}

/// Send a request with an optional JSON body and actor header.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    actor: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor) = actor {
        builder = builder.header("x-acting-user", actor);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body), None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Assert a 400 validation response carries exactly the given (field, kind)
/// pairs, in order.
pub async fn assert_validation_fields(response: Response<Body>, expected: &[(&str, &str)]) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), expected.len(), "fields: {fields:?}");
    for (entry, (field, kind)) in fields.iter().zip(expected) {
        assert_eq!(entry["field"], *field);
        assert_eq!(entry["kind"], *kind);
    }
}
