//! Handlers for the `/rooms` resource.
//!
//! Mutations take the legacy request envelopes (`{room: {...}}`, `{id}`) in
//! the body; an absent body maps to the `EmptyPayload` domain error rather
//! than a framework rejection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roomly_core::error::CoreError;
use roomly_db::models::room::{CreateRoomRequest, DeleteRoomRequest, Room, UpdateRoomRequest};
use roomly_db::repositories::RoomRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Actor;
use crate::service::rooms;
use crate::state::AppState;

/// POST /api/v1/rooms
pub async fn create(
    State(state): State<AppState>,
    Actor(actor): Actor,
    body: Option<Json<CreateRoomRequest>>,
) -> AppResult<(StatusCode, Json<Room>)> {
    let room = rooms::create_room(&state.pool, &actor, body.map(|Json(r)| r)).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// PUT /api/v1/rooms
pub async fn update(
    State(state): State<AppState>,
    Actor(actor): Actor,
    body: Option<Json<UpdateRoomRequest>>,
) -> AppResult<Json<Room>> {
    let room = rooms::update_room(
        &state.pool,
        state.config.update_guard,
        &actor,
        body.map(|Json(r)| r),
    )
    .await?;
    Ok(Json(room))
}

/// DELETE /api/v1/rooms
///
/// Returns the remaining room collection after deletion.
pub async fn delete(
    State(state): State<AppState>,
    Actor(actor): Actor,
    body: Option<Json<DeleteRoomRequest>>,
) -> AppResult<Json<Vec<Room>>> {
    let remaining = rooms::delete_room(&state.pool, &actor, body.map(|Json(r)| r)).await?;
    Ok(Json(remaining))
}

/// GET /api/v1/rooms
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = RoomRepo::list_all(&state.pool).await?;
    Ok(Json(rooms))
}

/// GET /api/v1/rooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Room>> {
    let room = RoomRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(Json(room))
}
