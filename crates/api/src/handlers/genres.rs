//! Handlers for the `/genres` resource.
//!
//! Genre writes carry `categories_id`; the genre row and its category links
//! are saved in one transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::rule_sets::{self, CATEGORIES_FIELD};
use catalog_core::types::DbId;
use catalog_core::validation::ValidatedFields;
use catalog_db::models::genre::{CreateGenre, UpdateGenre};
use catalog_db::relation::{RelationSpec, GENRE_CATEGORIES};
use catalog_db::repositories::{EntityRepo, GenreRepo};
use catalog_db::writer::EntityWriter;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::IncludeDeletedParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validation::{into_dto, validate};

/// Relation specs for the relation fields present in the request.
fn relation_specs(fields: &ValidatedFields) -> Vec<RelationSpec> {
    RelationSpec::when_present(GENRE_CATEGORIES, fields.ids(CATEGORIES_FIELD))
        .into_iter()
        .collect()
}

/// GET /api/v1/genres?include_deleted=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool, params.include_deleted).await?;
    tracing::debug!(count = genres.len(), "Listed genres");
    Ok(Json(DataResponse { data: genres }))
}

/// GET /api/v1/genres/{id}
///
/// Includes the linked categories.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::find_active_by_id(&state.pool, id).await?;
    let genre = GenreRepo::with_categories(&state.pool, genre).await?;
    Ok(Json(DataResponse { data: genre }))
}

/// POST /api/v1/genres
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let fields = validate(&state.pool, &rule_sets::GENRE_STORE, body).await?;
    let input: CreateGenre = into_dto(&fields)?;

    let genre =
        EntityWriter::create::<GenreRepo>(&state.pool, &input, &relation_specs(&fields)).await?;
    tracing::info!(genre_id = %genre.id, name = %genre.name, "Genre created");

    let genre = GenreRepo::with_categories(&state.pool, genre).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: genre })))
}

/// PUT /api/v1/genres/{id}
///
/// If `categories_id` is present, replaces the category links. A missing or
/// deleted genre is a 404 before the body is validated.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    GenreRepo::find_active_by_id(&state.pool, id).await?;

    let fields = validate(&state.pool, &rule_sets::GENRE_UPDATE, body).await?;
    let input: UpdateGenre = into_dto(&fields)?;

    let genre =
        EntityWriter::update::<GenreRepo>(&state.pool, id, &input, &relation_specs(&fields))
            .await?;
    tracing::info!(genre_id = %id, "Genre updated");

    let genre = GenreRepo::with_categories(&state.pool, genre).await?;
    Ok(Json(DataResponse { data: genre }))
}

/// DELETE /api/v1/genres/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GenreRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(genre_id = %id, "Genre deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: GenreRepo::ENTITY,
            id,
        }))
    }
}
