//! Handlers for the `/tags` resource.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::Json;
use noteful_core::error::CoreError;
use noteful_core::types::DbId;
use noteful_core::validation::require_field;
use noteful_db::models::tag::{Tag, TagInput};
use noteful_db::repositories::TagRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::response::Created;
use crate::state::AppState;

/// GET /api/tags
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Tag>>> {
    let tags = TagRepo::list(&state.pool).await?;
    Ok(Json(tags))
}

/// GET /api/tags/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Tag>> {
    let tag = TagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tag", id }))?;
    Ok(Json(tag))
}

/// POST /api/tags
///
/// A name already in use yields 409 via the `uq_tags_name` constraint.
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<TagInput>,
) -> AppResult<Created<Tag>> {
    let name = require_field(input.name.as_deref(), "name")?;

    let tag = TagRepo::create(&state.pool, name).await?;
    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

    Ok(Created::at(uri.path(), tag.id, tag))
}

/// PUT /api/tags/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<TagInput>,
) -> AppResult<Json<Tag>> {
    let name = require_field(input.name.as_deref(), "name")?;

    let tag = TagRepo::update(&state.pool, id, name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tag", id }))?;
    tracing::info!(tag_id = id, "Tag renamed");

    Ok(Json(tag))
}

/// DELETE /api/tags/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TagRepo::delete(&state.pool, id).await?;
    tracing::info!(tag_id = id, deleted, "Tag delete requested");
    Ok(StatusCode::NO_CONTENT)
}
