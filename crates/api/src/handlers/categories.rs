//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::rule_sets;
use catalog_core::types::DbId;
use catalog_db::models::category::{CreateCategory, UpdateCategory};
use catalog_db::repositories::{CategoryRepo, EntityRepo};
use catalog_db::writer::EntityWriter;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::IncludeDeletedParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validation::{into_dto, validate};

/// GET /api/v1/categories?include_deleted=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool, params.include_deleted).await?;
    tracing::debug!(count = categories.len(), "Listed categories");
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_active_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: category }))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let fields = validate(&state.pool, &rule_sets::CATEGORY, body).await?;
    let input: CreateCategory = into_dto(&fields)?;

    let category = EntityWriter::create::<CategoryRepo>(&state.pool, &input, &[]).await?;
    tracing::info!(category_id = %category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/categories/{id}
///
/// An explicit `null` (or empty) description clears it; omitting it keeps it.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    CategoryRepo::find_active_by_id(&state.pool, id).await?;

    let fields = validate(&state.pool, &rule_sets::CATEGORY, body).await?;
    let input: UpdateCategory = into_dto(&fields)?;

    let category = EntityWriter::update::<CategoryRepo>(&state.pool, id, &input, &[]).await?;
    tracing::info!(category_id = %id, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Soft delete. Existing genre and video links are kept.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CategoryRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(category_id = %id, "Category deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: CategoryRepo::ENTITY,
            id,
        }))
    }
}
