//! Foreign-key existence lookups backing the `exists` validation rule.

use catalog_core::types::DbId;
use sqlx::PgPool;

/// Checks referenced ids against the live rows of a table.
pub struct ExistenceRepo;

impl ExistenceRepo {
    /// Return the subset of `ids` with no live (non-deleted) row in `table`.
    ///
    /// `table` must come from a static rule set; it is interpolated into SQL.
    pub async fn missing_active_ids(
        pool: &PgPool,
        table: &'static str,
        ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT id FROM {table} WHERE id = ANY($1) AND deleted_at IS NULL");
        let found: Vec<DbId> = sqlx::query_scalar(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(ids.iter().filter(|id| !found.contains(id)).copied().collect())
    }
}
