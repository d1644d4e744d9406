//! Repository for the `rooms` table.
//!
//! Every method accepts any [`sqlx::PgExecutor`], so callers can pass either
//! the pool or an open transaction handle. The mutation service runs each
//! flow against one transaction to keep the unit of work atomic.

use sqlx::PgExecutor;

use crate::models::room::{NewRoom, Room};
use roomly_core::types::Timestamp;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, address, description, price_min, price_max, \
    acreage_min, acreage_max, longitude, latitude, status, price_range_id, \
    acreage_range_id, street_id, account_id, created_by, last_modified_by, \
    last_modified_date, created_at";

/// Columns written by insert and upsert (timestamps default on insert).
const INSERT_COLUMNS: &str = "id, address, description, price_min, price_max, \
    acreage_min, acreage_max, longitude, latitude, status, price_range_id, \
    acreage_range_id, street_id, account_id, created_by, last_modified_by";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Find a room by its identifier.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: &str,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a freshly assembled room, returning the created row.
    ///
    /// `last_modified_date` and `created_at` take their column defaults.
    pub async fn insert<'e>(
        executor: impl PgExecutor<'e>,
        room: &NewRoom,
    ) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms ({INSERT_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        bind_room(sqlx::query_as::<_, Room>(&query), room)
            .fetch_one(executor)
            .await
    }

    /// Insert-or-update a room keyed on its identifier.
    ///
    /// The update arm rewrites every scalar and reference column, stamps
    /// `last_modified_by` and `last_modified_date`, and never touches
    /// `created_by` or `created_at`.
    pub async fn upsert<'e>(
        executor: impl PgExecutor<'e>,
        room: &NewRoom,
        last_modified_date: Timestamp,
    ) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms ({INSERT_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             ON CONFLICT (id) DO UPDATE SET
                address = EXCLUDED.address,
                description = EXCLUDED.description,
                price_min = EXCLUDED.price_min,
                price_max = EXCLUDED.price_max,
                acreage_min = EXCLUDED.acreage_min,
                acreage_max = EXCLUDED.acreage_max,
                longitude = EXCLUDED.longitude,
                latitude = EXCLUDED.latitude,
                status = EXCLUDED.status,
                price_range_id = EXCLUDED.price_range_id,
                acreage_range_id = EXCLUDED.acreage_range_id,
                street_id = EXCLUDED.street_id,
                account_id = EXCLUDED.account_id,
                last_modified_by = EXCLUDED.last_modified_by,
                last_modified_date = $17
             RETURNING {COLUMNS}"
        );
        bind_room(sqlx::query_as::<_, Room>(&query), room)
            .bind(last_modified_date)
            .fetch_one(executor)
            .await
    }

    /// Permanently delete a room by identifier. Returns `true` if a row was
    /// removed.
    pub async fn delete_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every room, ordered by creation time ascending.
    pub async fn list_all<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms ORDER BY created_at ASC");
        sqlx::query_as::<_, Room>(&query).fetch_all(executor).await
    }
}

/// Bind the sixteen insert columns in declaration order.
fn bind_room<'q>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, Room, sqlx::postgres::PgArguments>,
    room: &'q NewRoom,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, Room, sqlx::postgres::PgArguments> {
    query
        .bind(&room.id)
        .bind(&room.address)
        .bind(&room.description)
        .bind(room.price_min)
        .bind(room.price_max)
        .bind(room.acreage_min)
        .bind(room.acreage_max)
        .bind(room.longitude)
        .bind(room.latitude)
        .bind(room.status)
        .bind(&room.price_range_id)
        .bind(&room.acreage_range_id)
        .bind(&room.street_id)
        .bind(&room.account_id)
        .bind(&room.created_by)
        .bind(&room.last_modified_by)
}
