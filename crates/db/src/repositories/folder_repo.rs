//! Repository for the `folders` table.

use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::folder::Folder;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for folders.
pub struct FolderRepo;

impl FolderRepo {
    /// List every folder ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders ORDER BY id");
        sqlx::query_as::<_, Folder>(&query).fetch_all(pool).await
    }

    /// Find a folder by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders WHERE id = $1");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new folder, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Folder, sqlx::Error> {
        let query = format!("INSERT INTO folders (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Folder>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Replace a folder's name.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, name: &str) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("UPDATE folders SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a folder by ID. Returns `true` if a row was removed.
    ///
    /// Notes filed in the folder keep existing with `folder_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
