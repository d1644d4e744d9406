//! Room entity model and mutation request DTOs.

use roomly_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Listing status. Forced to `Active` by both the create and update flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_status")]
pub enum RoomStatus {
    Active,
    Inactive,
}

/// A room row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: EntityId,
    pub address: String,
    pub description: String,
    pub price_min: i64,
    pub price_max: i64,
    pub acreage_min: f64,
    pub acreage_max: f64,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub status: RoomStatus,
    pub price_range_id: EntityId,
    pub acreage_range_id: EntityId,
    pub street_id: EntityId,
    pub account_id: EntityId,
    pub created_by: String,
    pub last_modified_by: String,
    pub last_modified_date: Timestamp,
    pub created_at: Timestamp,
}

/// A fully-assembled room ready for persistence.
///
/// Timestamps are absent: `created_at` and `last_modified_date` are left to
/// the column defaults on insert and stamped explicitly on update.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub id: EntityId,
    pub address: String,
    pub description: String,
    pub price_min: i64,
    pub price_max: i64,
    pub acreage_min: f64,
    pub acreage_max: f64,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub status: RoomStatus,
    pub price_range_id: EntityId,
    pub acreage_range_id: EntityId,
    pub street_id: EntityId,
    pub account_id: EntityId,
    pub created_by: String,
    pub last_modified_by: String,
}

/// An embedded reference to a lookup entity, `{"id": "..."}` on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityRef {
    #[serde(default)]
    pub id: EntityId,
}

/// The untrusted room payload embedded in create/update requests.
///
/// Every field is defaulted so shape problems surface as field-level
/// validation errors rather than deserialization failures. `priceRage`
/// keeps the legacy client spelling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomPayload {
    pub id: EntityId,
    pub address: String,
    pub description: String,
    pub price_min: i64,
    pub price_max: i64,
    pub acreage_min: f64,
    pub acreage_max: f64,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    #[serde(rename = "priceRage")]
    pub price_range: Option<EntityRef>,
    pub acreage_range: Option<EntityRef>,
    pub street: Option<EntityRef>,
    pub account: Option<EntityRef>,
}

/// Request envelope for room creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateRoomRequest {
    pub room: Option<RoomPayload>,
}

/// Request envelope for room update. The payload carries the target id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateRoomRequest {
    pub room: Option<RoomPayload>,
}

/// Request envelope for room deletion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteRoomRequest {
    pub id: Option<EntityId>,
}
