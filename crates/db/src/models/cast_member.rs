//! Cast member entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cast_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastMember {
    pub id: DbId,
    pub name: String,
    /// `0` = director, `1` = actor. See `catalog_core::catalog`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub member_type: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new cast member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCastMember {
    pub name: String,
    #[serde(rename = "type")]
    pub member_type: i16,
}

/// DTO for updating an existing cast member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCastMember {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub member_type: Option<i16>,
}
