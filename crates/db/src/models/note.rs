//! Note entity model, DTOs and list filters.

use noteful_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::tag::Tag;

/// A note as exposed by the API.
///
/// `folder_name` is joined from `folders` and `tags` is aggregated from the
/// `notes_tags` association table, so every read returns the full shape.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub folder_id: Option<DbId>,
    pub folder_name: Option<String>,
    #[sqlx(json)]
    pub tags: Vec<Tag>,
}

/// Request body for creating or replacing a note.
///
/// Fields left out of an update are cleared, not preserved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<DbId>,
}

/// Query parameters accepted by the note listing (`?searchTerm=&folderId=`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListParams {
    pub search_term: Option<String>,
    pub folder_id: Option<DbId>,
}
