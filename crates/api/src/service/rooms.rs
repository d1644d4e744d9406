//! Room mutation workflow: validate, resolve references, assemble, persist.
//!
//! Each operation runs against a single transaction so any failure after
//! partial work leaves the store unchanged. Validation accumulates every
//! applicable field error into one result; reference resolution is
//! fail-fast in a fixed order (price range, acreage range, street,
//! account).

use roomly_core::error::CoreError;
use roomly_core::validation::{
    ErrorKind, ValidationErrors, FIELD_ACCOUNT_ID, FIELD_ACREAGE_RANGE_ID, FIELD_ID,
    FIELD_PRICE_RANGE_ID, FIELD_ROOM, FIELD_ROOM_ID, FIELD_STREET_ID,
};
use roomly_db::models::lookup::{Account, AcreageRange, PriceRange, Street};
use roomly_db::models::room::{
    CreateRoomRequest, DeleteRoomRequest, NewRoom, Room, RoomPayload, RoomStatus,
    UpdateRoomRequest,
};
use roomly_db::repositories::{
    AccountRepo, AcreageRangeRepo, PriceRangeRepo, RoomRepo, StreetRepo,
};
use roomly_db::DbPool;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::AppError;

/// Existence policy applied to the target id when updating a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateGuard {
    /// The target room must already exist (the corrected behavior).
    Strict,
    /// The target id must be absent, mirroring the historical create-style
    /// duplicate check. An update under this guard inserts a fresh row.
    Legacy,
}

impl UpdateGuard {
    /// Parse an `UPDATE_GUARD` environment value.
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }
}

/// The four lookup records a room references, resolved at write time.
struct ResolvedRefs {
    price_range: PriceRange,
    acreage_range: AcreageRange,
    street: Street,
    account: Account,
}

/// Create a new room listing.
///
/// A fresh identifier is generated regardless of any id in the payload; the
/// submitted id is only used for the duplicate check.
pub async fn create_room(
    pool: &DbPool,
    actor: &str,
    request: Option<CreateRoomRequest>,
) -> Result<Room, AppError> {
    let request = request.ok_or(CoreError::EmptyPayload)?;

    let mut tx = pool.begin().await?;

    let payload = require_payload(request.room)?;
    let mut errors = payload_shape_errors(&payload);

    if !payload.id.is_empty() && RoomRepo::find_by_id(&mut *tx, &payload.id).await?.is_some() {
        errors.push(FIELD_ROOM_ID, ErrorKind::Duplicate);
    }
    errors.into_result().map_err(CoreError::from)?;

    let refs = resolve_references(&mut tx, &payload).await?;
    let room = assemble(payload, &refs, Uuid::new_v4().to_string(), actor, actor);

    let created = RoomRepo::insert(&mut *tx, &room).await?;
    tx.commit().await?;

    tracing::info!(room_id = %created.id, %actor, "Room created");
    Ok(created)
}

/// Update an existing room listing.
///
/// The identifier is preserved, every scalar and reference is rewritten,
/// status is forced back to `Active`, and the modification audit fields are
/// refreshed. `created_by` is never touched for an existing row.
pub async fn update_room(
    pool: &DbPool,
    guard: UpdateGuard,
    actor: &str,
    request: Option<UpdateRoomRequest>,
) -> Result<Room, AppError> {
    let request = request.ok_or(CoreError::EmptyPayload)?;

    let mut tx = pool.begin().await?;

    let payload = require_payload(request.room)?;
    let mut errors = payload_shape_errors(&payload);

    if payload.id.is_empty() {
        errors.push(FIELD_ROOM_ID, ErrorKind::NotNull);
    } else {
        let existing = RoomRepo::find_by_id(&mut *tx, &payload.id).await?;
        match guard {
            UpdateGuard::Strict if existing.is_none() => {
                errors.push(FIELD_ROOM_ID, ErrorKind::NotFound);
            }
            UpdateGuard::Legacy if existing.is_some() => {
                errors.push(FIELD_ROOM_ID, ErrorKind::Duplicate);
            }
            _ => {}
        }
    }
    errors.into_result().map_err(CoreError::from)?;

    let refs = resolve_references(&mut tx, &payload).await?;
    let id = payload.id.clone();
    let room = assemble(payload, &refs, id, actor, actor);

    let updated = RoomRepo::upsert(&mut *tx, &room, chrono::Utc::now()).await?;
    tx.commit().await?;

    tracing::info!(room_id = %updated.id, %actor, "Room updated");
    Ok(updated)
}

/// Delete a room by identifier and return the remaining room collection.
///
/// Deleting a nonexistent identifier is an error, not a no-op.
pub async fn delete_room(
    pool: &DbPool,
    actor: &str,
    request: Option<DeleteRoomRequest>,
) -> Result<Vec<Room>, AppError> {
    let request = request.ok_or(CoreError::EmptyPayload)?;

    let id = match request.id {
        Some(id) if !id.is_empty() => id,
        _ => {
            return Err(
                CoreError::from(ValidationErrors::single(FIELD_ID, ErrorKind::NotNull)).into(),
            )
        }
    };

    let mut tx = pool.begin().await?;

    if !RoomRepo::delete_by_id(&mut *tx, &id).await? {
        return Err(CoreError::NotFound {
            entity: "Room",
            id,
        }
        .into());
    }
    let remaining = RoomRepo::list_all(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!(room_id = %id, %actor, "Room deleted");
    Ok(remaining)
}

/// Reject a request whose embedded room payload is absent.
fn require_payload(room: Option<RoomPayload>) -> Result<RoomPayload, AppError> {
    room.ok_or_else(|| {
        CoreError::from(ValidationErrors::single(FIELD_ROOM, ErrorKind::NotNull)).into()
    })
}

/// Collect shape errors for the payload's embedded references.
///
/// A reference that is absent or carries an empty id can never resolve, so
/// it is reported up front together with every other applicable error.
fn payload_shape_errors(payload: &RoomPayload) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let checks = [
        (FIELD_PRICE_RANGE_ID, &payload.price_range),
        (FIELD_ACREAGE_RANGE_ID, &payload.acreage_range),
        (FIELD_STREET_ID, &payload.street),
        (FIELD_ACCOUNT_ID, &payload.account),
    ];
    for (field, reference) in checks {
        if reference.as_ref().is_none_or(|r| r.id.is_empty()) {
            errors.push(field, ErrorKind::NotNull);
        }
    }

    errors
}

/// Resolve the four lookup references in fixed order, stopping at the first
/// missing record.
///
/// Callers run this after [`payload_shape_errors`], so the references are
/// known to be present with non-empty ids.
async fn resolve_references(
    conn: &mut PgConnection,
    payload: &RoomPayload,
) -> Result<ResolvedRefs, AppError> {
    let missing =
        |field| AppError::from(CoreError::from(ValidationErrors::single(field, ErrorKind::NotNull)));

    let price_range_id = payload.price_range.as_ref().map(|r| r.id.as_str()).unwrap_or("");
    let acreage_range_id = payload.acreage_range.as_ref().map(|r| r.id.as_str()).unwrap_or("");
    let street_id = payload.street.as_ref().map(|r| r.id.as_str()).unwrap_or("");
    let account_id = payload.account.as_ref().map(|r| r.id.as_str()).unwrap_or("");

    let price_range = PriceRangeRepo::find_by_id(&mut *conn, price_range_id)
        .await?
        .ok_or_else(|| missing(FIELD_PRICE_RANGE_ID))?;
    let acreage_range = AcreageRangeRepo::find_by_id(&mut *conn, acreage_range_id)
        .await?
        .ok_or_else(|| missing(FIELD_ACREAGE_RANGE_ID))?;
    let street = StreetRepo::find_by_id(&mut *conn, street_id)
        .await?
        .ok_or_else(|| missing(FIELD_STREET_ID))?;
    let account = AccountRepo::find_by_id(&mut *conn, account_id)
        .await?
        .ok_or_else(|| missing(FIELD_ACCOUNT_ID))?;

    Ok(ResolvedRefs {
        price_range,
        acreage_range,
        street,
        account,
    })
}

/// Build the persistable room from a validated payload and resolved
/// references. Scalars are copied verbatim; status is always `Active`.
fn assemble(
    payload: RoomPayload,
    refs: &ResolvedRefs,
    id: String,
    created_by: &str,
    last_modified_by: &str,
) -> NewRoom {
    NewRoom {
        id,
        address: payload.address,
        description: payload.description,
        price_min: payload.price_min,
        price_max: payload.price_max,
        acreage_min: payload.acreage_min,
        acreage_max: payload.acreage_max,
        longitude: payload.longitude,
        latitude: payload.latitude,
        status: RoomStatus::Active,
        price_range_id: refs.price_range.id.clone(),
        acreage_range_id: refs.acreage_range.id.clone(),
        street_id: refs.street.id.clone(),
        account_id: refs.account.id.clone(),
        created_by: created_by.to_string(),
        last_modified_by: last_modified_by.to_string(),
    }
}
