//! Handlers for the `/folders` resource.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::Json;
use noteful_core::error::CoreError;
use noteful_core::types::DbId;
use noteful_core::validation::require_field;
use noteful_db::models::folder::{Folder, FolderInput};
use noteful_db::repositories::FolderRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::response::Created;
use crate::state::AppState;

/// GET /api/folders
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Folder>>> {
    let folders = FolderRepo::list(&state.pool).await?;
    Ok(Json(folders))
}

/// GET /api/folders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Folder>> {
    let folder = FolderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Folder",
            id,
        }))?;
    Ok(Json(folder))
}

/// POST /api/folders
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<FolderInput>,
) -> AppResult<Created<Folder>> {
    let name = require_field(input.name.as_deref(), "name")?;

    let folder = FolderRepo::create(&state.pool, name).await?;
    tracing::info!(folder_id = folder.id, name = %folder.name, "Folder created");

    Ok(Created::at(uri.path(), folder.id, folder))
}

/// PUT /api/folders/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<FolderInput>,
) -> AppResult<Json<Folder>> {
    let name = require_field(input.name.as_deref(), "name")?;

    let folder = FolderRepo::update(&state.pool, id, name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Folder",
            id,
        }))?;
    tracing::info!(folder_id = id, "Folder updated");

    Ok(Json(folder))
}

/// DELETE /api/folders/{id}
///
/// Always 204: deleting an absent folder is not an error.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FolderRepo::delete(&state.pool, id).await?;
    tracing::info!(folder_id = id, deleted, "Folder delete requested");
    Ok(StatusCode::NO_CONTENT)
}
