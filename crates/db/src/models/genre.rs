//! Genre entity model and DTOs.
//!
//! Genres link to categories through the `category_genre` junction table.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::category::Category;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// A genre enriched with its linked categories (soft-deleted ones included).
#[derive(Debug, Clone, Serialize)]
pub struct GenreWithCategories {
    #[serde(flatten)]
    pub genre: Genre,
    pub categories: Vec<Category>,
}

/// DTO for creating a new genre. Category ids travel separately as a
/// relation spec.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing genre.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGenre {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}
