//! Repository for the `price_ranges` lookup table.

use sqlx::PgExecutor;

use crate::models::lookup::PriceRange;

/// Read-only access to price ranges.
pub struct PriceRangeRepo;

impl PriceRangeRepo {
    /// Find a price range by its identifier.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: &str,
    ) -> Result<Option<PriceRange>, sqlx::Error> {
        sqlx::query_as::<_, PriceRange>(
            "SELECT id, name, price_min, price_max FROM price_ranges WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }
}
