//! Tag entity model and DTOs.

use noteful_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table. Also the element type of `Note::tags`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
}

/// Request body for creating or replacing a tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagInput {
    pub name: Option<String>,
}
