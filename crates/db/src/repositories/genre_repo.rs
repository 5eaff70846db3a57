//! Repository for the `genres` table and its category links.

use async_trait::async_trait;
use catalog_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use super::category_repo::CategoryRepo;
use super::entity::EntityRepo;
use crate::models::genre::{CreateGenre, Genre, GenreWithCategories, UpdateGenre};
use crate::relation::{RelationSync, GENRE_CATEGORIES};

const COLUMNS: &str = "id, name, is_active, created_at, updated_at, deleted_at";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

#[async_trait]
impl EntityRepo for GenreRepo {
    type Entity = Genre;
    type Create = CreateGenre;
    type Update = UpdateGenre;

    const ENTITY: &'static str = "Genre";
    const TABLE: &'static str = "genres";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "name, created_at";

    /// If `is_active` is `None` in the input, defaults to `true`.
    async fn insert(
        conn: &mut PgConnection,
        id: DbId,
        input: &CreateGenre,
    ) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genres (id, name, is_active)
             VALUES ($1, $2, COALESCE($3, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_active)
            .fetch_one(conn)
            .await
    }

    async fn update_fields(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!(
            "UPDATE genres SET
                name = COALESCE($2, name),
                is_active = COALESCE($3, is_active)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_active)
            .fetch_optional(conn)
            .await
    }
}

impl GenreRepo {
    /// Attach the genre's linked categories (soft-deleted ones included).
    pub async fn with_categories(
        pool: &PgPool,
        genre: Genre,
    ) -> Result<GenreWithCategories, sqlx::Error> {
        let categories =
            RelationSync::load_related::<CategoryRepo, _>(pool, &GENRE_CATEGORIES, genre.id)
                .await?;
        Ok(GenreWithCategories { genre, categories })
    }
}
