//! Repository for the `videos` table and its category and genre links.

use async_trait::async_trait;
use catalog_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use super::category_repo::CategoryRepo;
use super::entity::EntityRepo;
use super::genre_repo::GenreRepo;
use crate::models::video::{CreateVideo, UpdateVideo, Video, VideoWithRelations};
use crate::relation::{RelationSync, VIDEO_CATEGORIES, VIDEO_GENRES};

const COLUMNS: &str = "id, title, description, year_launched, opened, rating, duration, \
    created_at, updated_at, deleted_at";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

#[async_trait]
impl EntityRepo for VideoRepo {
    type Entity = Video;
    type Create = CreateVideo;
    type Update = UpdateVideo;

    const ENTITY: &'static str = "Video";
    const TABLE: &'static str = "videos";
    const COLUMNS: &'static str = COLUMNS;

    /// If `opened` is `None` in the input, defaults to `false`.
    async fn insert(
        conn: &mut PgConnection,
        id: DbId,
        input: &CreateVideo,
    ) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos \
                (id, title, description, year_launched, opened, rating, duration) \
             VALUES ($1, $2, $3, $4, COALESCE($5, false), $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.year_launched)
            .bind(input.opened)
            .bind(&input.rating)
            .bind(input.duration)
            .fetch_one(conn)
            .await
    }

    async fn update_fields(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                year_launched = COALESCE($4, year_launched), \
                opened = COALESCE($5, opened), \
                rating = COALESCE($6, rating), \
                duration = COALESCE($7, duration) \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.year_launched)
            .bind(input.opened)
            .bind(&input.rating)
            .bind(input.duration)
            .fetch_optional(conn)
            .await
    }
}

impl VideoRepo {
    /// Attach the video's linked categories and genres (soft-deleted ones
    /// included).
    pub async fn with_relations(
        pool: &PgPool,
        video: Video,
    ) -> Result<VideoWithRelations, sqlx::Error> {
        let categories =
            RelationSync::load_related::<CategoryRepo, _>(pool, &VIDEO_CATEGORIES, video.id)
                .await?;
        let genres =
            RelationSync::load_related::<GenreRepo, _>(pool, &VIDEO_GENRES, video.id).await?;
        Ok(VideoWithRelations {
            video,
            categories,
            genres,
        })
    }
}
