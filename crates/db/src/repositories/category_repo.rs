//! Repository for the `categories` table.

use async_trait::async_trait;
use catalog_core::types::DbId;
use sqlx::PgConnection;

use super::entity::EntityRepo;
use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at, deleted_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

#[async_trait]
impl EntityRepo for CategoryRepo {
    type Entity = Category;
    type Create = CreateCategory;
    type Update = UpdateCategory;

    const ENTITY: &'static str = "Category";
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "name, created_at";

    /// If `is_active` is `None` in the input, defaults to `true`.
    async fn insert(
        conn: &mut PgConnection,
        id: DbId,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (id, name, description, is_active)
             VALUES ($1, $2, $3, COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(conn)
            .await
    }

    async fn update_fields(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                is_active = COALESCE($5, is_active)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.is_active)
            .fetch_optional(conn)
            .await
    }
}
