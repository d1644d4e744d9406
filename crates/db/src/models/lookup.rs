//! Lookup entity models: referenced by rooms, never mutated by this service.

use roomly_core::types::EntityId;
use serde::Serialize;
use sqlx::FromRow;

/// A price bracket rooms are classified under.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub id: EntityId,
    pub name: String,
    pub price_min: i64,
    pub price_max: i64,
}

/// An acreage bracket rooms are classified under.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcreageRange {
    pub id: EntityId,
    pub name: String,
    pub acreage_min: f64,
    pub acreage_max: f64,
}

/// A street a room is located on.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Street {
    pub id: EntityId,
    pub name: String,
}

/// The account that owns a room listing.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: EntityId,
    pub username: String,
    pub full_name: String,
}
