//! Handlers for the `/cast_members` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::rule_sets;
use catalog_core::types::DbId;
use catalog_db::models::cast_member::{CreateCastMember, UpdateCastMember};
use catalog_db::repositories::{CastMemberRepo, EntityRepo};
use catalog_db::writer::EntityWriter;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::IncludeDeletedParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validation::{into_dto, validate};

/// GET /api/v1/cast_members?include_deleted=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<impl IntoResponse> {
    let members = CastMemberRepo::list(&state.pool, params.include_deleted).await?;
    tracing::debug!(count = members.len(), "Listed cast members");
    Ok(Json(DataResponse { data: members }))
}

/// GET /api/v1/cast_members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let member = CastMemberRepo::find_active_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: member }))
}

/// POST /api/v1/cast_members
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let fields = validate(&state.pool, &rule_sets::CAST_MEMBER, body).await?;
    let input: CreateCastMember = into_dto(&fields)?;

    let member = EntityWriter::create::<CastMemberRepo>(&state.pool, &input, &[]).await?;
    tracing::info!(
        cast_member_id = %member.id,
        member_type = member.member_type,
        "Cast member created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// PUT /api/v1/cast_members/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    CastMemberRepo::find_active_by_id(&state.pool, id).await?;

    let fields = validate(&state.pool, &rule_sets::CAST_MEMBER, body).await?;
    let input: UpdateCastMember = into_dto(&fields)?;

    let member = EntityWriter::update::<CastMemberRepo>(&state.pool, id, &input, &[]).await?;
    tracing::info!(cast_member_id = %id, "Cast member updated");

    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/cast_members/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CastMemberRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(cast_member_id = %id, "Cast member deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: CastMemberRepo::ENTITY,
            id,
        }))
    }
}
