pub mod health;
pub mod rooms;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rooms           POST create, PUT update, DELETE delete, GET list
/// /rooms/{id}      GET fetch one
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/rooms", rooms::router())
}
