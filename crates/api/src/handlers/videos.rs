//! Handlers for the `/videos` resource.
//!
//! A video write saves the row plus its category and genre links
//! atomically: an invalid genre set rolls back the category sync too.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::rule_sets::{self, CATEGORIES_FIELD, GENRES_FIELD};
use catalog_core::types::DbId;
use catalog_core::validation::ValidatedFields;
use catalog_db::models::video::{CreateVideo, UpdateVideo};
use catalog_db::relation::{RelationSpec, VIDEO_CATEGORIES, VIDEO_GENRES};
use catalog_db::repositories::{EntityRepo, VideoRepo};
use catalog_db::writer::EntityWriter;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::IncludeDeletedParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validation::{into_dto, validate};

fn relation_specs(fields: &ValidatedFields) -> Vec<RelationSpec> {
    [
        RelationSpec::when_present(VIDEO_CATEGORIES, fields.ids(CATEGORIES_FIELD)),
        RelationSpec::when_present(VIDEO_GENRES, fields.ids(GENRES_FIELD)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// GET /api/v1/videos?include_deleted=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<impl IntoResponse> {
    let videos = VideoRepo::list(&state.pool, params.include_deleted).await?;
    tracing::debug!(count = videos.len(), "Listed videos");
    Ok(Json(DataResponse { data: videos }))
}

/// GET /api/v1/videos/{id}
///
/// Includes the linked categories and genres.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let video = VideoRepo::find_active_by_id(&state.pool, id).await?;
    let video = VideoRepo::with_relations(&state.pool, video).await?;
    Ok(Json(DataResponse { data: video }))
}

/// POST /api/v1/videos
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let fields = validate(&state.pool, &rule_sets::VIDEO_STORE, body).await?;
    let input: CreateVideo = into_dto(&fields)?;

    let video =
        EntityWriter::create::<VideoRepo>(&state.pool, &input, &relation_specs(&fields)).await?;
    tracing::info!(video_id = %video.id, title = %video.title, "Video created");

    let video = VideoRepo::with_relations(&state.pool, video).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// PUT /api/v1/videos/{id}
///
/// `categories_id` and `genres_id` each replace their links when present
/// and are left alone when omitted.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    VideoRepo::find_active_by_id(&state.pool, id).await?;

    let fields = validate(&state.pool, &rule_sets::VIDEO_UPDATE, body).await?;
    let input: UpdateVideo = into_dto(&fields)?;

    let video =
        EntityWriter::update::<VideoRepo>(&state.pool, id, &input, &relation_specs(&fields))
            .await?;
    tracing::info!(video_id = %id, "Video updated");

    let video = VideoRepo::with_relations(&state.pool, video).await?;
    Ok(Json(DataResponse { data: video }))
}

/// DELETE /api/v1/videos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if VideoRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(video_id = %id, "Video deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: VideoRepo::ENTITY,
            id,
        }))
    }
}
