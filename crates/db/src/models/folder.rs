//! Folder entity model and DTOs.

use noteful_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `folders` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Folder {
    pub id: DbId,
    pub name: String,
}

/// Request body for creating or replacing a folder.
///
/// `name` is optional here so the handler can report a missing value with
/// its own message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderInput {
    pub name: Option<String>,
}
