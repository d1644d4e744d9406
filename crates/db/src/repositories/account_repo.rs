//! Repository for the `accounts` lookup table.

use sqlx::PgExecutor;

use crate::models::lookup::Account;

/// Read-only access to accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Find an account by its identifier.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>("SELECT id, username, full_name FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
