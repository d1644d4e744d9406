//! Repository for the `streets` lookup table.

use sqlx::PgExecutor;

use crate::models::lookup::Street;

/// Read-only access to streets.
pub struct StreetRepo;

impl StreetRepo {
    /// Find a street by its identifier.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: &str,
    ) -> Result<Option<Street>, sqlx::Error> {
        sqlx::query_as::<_, Street>("SELECT id, name FROM streets WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
