//! Handlers for the `/notes` resource.
//!
//! Notes are returned with their folder name and tags attached. Creation and
//! update replace `title`, `content` and `folderId` wholesale.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::Json;
use noteful_core::error::CoreError;
use noteful_core::types::DbId;
use noteful_core::validation::require_field;
use noteful_db::models::note::{Note, NoteInput, NoteListParams};
use noteful_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::response::Created;
use crate::state::AppState;

/// GET /api/notes?searchTerm=&folderId=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<NoteListParams>,
) -> AppResult<Json<Vec<Note>>> {
    let notes = NoteRepo::list(&state.pool, &params).await?;
    Ok(Json(notes))
}

/// GET /api/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    Ok(Json(note))
}

/// POST /api/notes
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<NoteInput>,
) -> AppResult<Created<Note>> {
    let title = require_field(input.title.as_deref(), "title")?;

    let note = NoteRepo::create(
        &state.pool,
        title,
        input.content.as_deref(),
        input.folder_id,
    )
    .await?;
    tracing::info!(note_id = note.id, folder_id = ?note.folder_id, "Note created");

    Ok(Created::at(uri.path(), note.id, note))
}

/// PUT /api/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<NoteInput>,
) -> AppResult<Json<Note>> {
    let title = require_field(input.title.as_deref(), "title")?;

    let note = NoteRepo::update(
        &state.pool,
        id,
        title,
        input.content.as_deref(),
        input.folder_id,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    tracing::info!(note_id = id, "Note updated");

    Ok(Json(note))
}

/// DELETE /api/notes/{id}
///
/// Always 204, whether or not the note existed.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;
    tracing::info!(note_id = id, deleted, "Note delete requested");
    Ok(StatusCode::NO_CONTENT)
}
