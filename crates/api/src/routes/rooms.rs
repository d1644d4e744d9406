//! Route definitions for the rooms resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::room;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// POST   /        create (body {room})
/// PUT    /        update (body {room} with id)
/// DELETE /        delete (body {id}), returns remaining rooms
/// GET    /        list all
/// GET    /{id}    fetch one
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(room::list)
                .post(room::create)
                .put(room::update)
                .delete(room::delete),
        )
        .route("/{id}", get(room::get_by_id))
}
