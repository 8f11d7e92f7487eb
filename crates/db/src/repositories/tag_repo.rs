//! Repository for the `tags` table.

use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::tag::Tag;

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// List every tag ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY id");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new tag. Fails with a unique violation (`uq_tags_name`) if
    /// the name is taken.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Tag, sqlx::Error> {
        let query = format!("INSERT INTO tags (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Rename a tag. Returns `None` if no tag with the given ID exists.
    pub async fn update(pool: &PgPool, id: DbId, name: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("UPDATE tags SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tag and, by cascade, its note associations.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
