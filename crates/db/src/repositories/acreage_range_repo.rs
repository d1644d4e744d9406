//! Repository for the `acreage_ranges` lookup table.

use sqlx::PgExecutor;

use crate::models::lookup::AcreageRange;

/// Read-only access to acreage ranges.
pub struct AcreageRangeRepo;

impl AcreageRangeRepo {
    /// Find an acreage range by its identifier.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: &str,
    ) -> Result<Option<AcreageRange>, sqlx::Error> {
        sqlx::query_as::<_, AcreageRange>(
            "SELECT id, name, acreage_min, acreage_max FROM acreage_ranges WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }
}
