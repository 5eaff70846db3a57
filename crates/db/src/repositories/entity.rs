//! Shared CRUD surface for soft-deletable catalog entities.
//!
//! Implementors supply the table metadata and the two column-specific
//! statements (insert and update); reads, listing and soft delete are
//! provided. Write primitives take a connection so the caller decides the
//! transaction boundary; nothing here begins or commits one.

use async_trait::async_trait;
use catalog_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::error::DbError;

#[async_trait]
pub trait EntityRepo: Send + Sync + 'static {
    /// Row type returned by every query.
    type Entity: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin;
    /// Insert DTO.
    type Create: Send + Sync;
    /// Patch DTO; `None` fields are left unchanged.
    type Update: Send + Sync;

    /// Entity name used in `NotFound` errors and logs.
    const ENTITY: &'static str;
    /// Backing table.
    const TABLE: &'static str;
    /// Column list shared across queries.
    const COLUMNS: &'static str;
    /// `ORDER BY` clause for listings.
    const ORDER_BY: &'static str = "created_at DESC";

    /// Insert a row with a caller-assigned id, returning it.
    async fn insert(
        conn: &mut PgConnection,
        id: DbId,
        input: &Self::Create,
    ) -> Result<Self::Entity, sqlx::Error>;

    /// Apply `input` to a live row. `None` if no non-deleted row has `id`.
    async fn update_fields(
        conn: &mut PgConnection,
        id: DbId,
        input: &Self::Update,
    ) -> Result<Option<Self::Entity>, sqlx::Error>;

    /// Find a row by id. Soft-deleted rows are only returned when
    /// `include_deleted` is set.
    async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        include_deleted: bool,
    ) -> Result<Option<Self::Entity>, sqlx::Error> {
        let query = if include_deleted {
            format!("SELECT {} FROM {} WHERE id = $1", Self::COLUMNS, Self::TABLE)
        } else {
            format!(
                "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
                Self::COLUMNS,
                Self::TABLE
            )
        };
        sqlx::query_as::<_, Self::Entity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a live row, failing with `NotFound` if missing or soft-deleted.
    async fn find_active_by_id(pool: &PgPool, id: DbId) -> Result<Self::Entity, DbError> {
        Self::find_by_id(pool, id, false)
            .await?
            .ok_or(DbError::NotFound {
                entity: Self::ENTITY,
                id,
            })
    }

    /// Find a row whether or not it is soft-deleted.
    async fn find_including_deleted(pool: &PgPool, id: DbId) -> Result<Self::Entity, DbError> {
        Self::find_by_id(pool, id, true)
            .await?
            .ok_or(DbError::NotFound {
                entity: Self::ENTITY,
                id,
            })
    }

    /// List rows, optionally including soft-deleted ones.
    async fn list(pool: &PgPool, include_deleted: bool) -> Result<Vec<Self::Entity>, sqlx::Error> {
        let filter = if include_deleted {
            ""
        } else {
            "WHERE deleted_at IS NULL "
        };
        let query = format!(
            "SELECT {} FROM {} {filter}ORDER BY {}",
            Self::COLUMNS,
            Self::TABLE,
            Self::ORDER_BY
        );
        sqlx::query_as::<_, Self::Entity>(&query)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete a row. Returns `true` if a live row was marked deleted.
    async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
            Self::TABLE
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
