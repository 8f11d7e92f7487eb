//! Repository for the `notes` table.
//!
//! Every read joins the owning folder's name and aggregates the note's tags
//! from `notes_tags`, so callers always receive a complete [`Note`]. Writes
//! use a data-modifying CTE so the joined shape is still produced by a
//! single statement.

use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{Note, NoteListParams};

/// Projection over a relation aliased `n` (either `notes` or a CTE with the
/// same columns) left-joined to `folders` as `f`.
const NOTE_COLUMNS: &str = "\
    n.id, n.title, n.content, n.folder_id, f.name AS folder_name, \
    COALESCE(( \
        SELECT json_agg(json_build_object('id', t.id, 'name', t.name) ORDER BY t.id) \
        FROM notes_tags nt \
        JOIN tags t ON t.id = nt.tag_id \
        WHERE nt.note_id = n.id \
    ), '[]'::json) AS tags";

/// Columns returned from `INSERT`/`UPDATE ... RETURNING` into the CTE.
const RAW_COLUMNS: &str = "id, title, content, folder_id";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List notes ordered by ascending ID.
    ///
    /// A non-empty `search_term` keeps only notes whose title contains it as
    /// a literal, case-sensitive substring. `folder_id` restricts the list to
    /// one folder.
    pub async fn list(pool: &PgPool, params: &NoteListParams) -> Result<Vec<Note>, sqlx::Error> {
        let pattern = params
            .search_term
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(contains_pattern);

        let query = format!(
            "SELECT {NOTE_COLUMNS} \
             FROM notes n \
             LEFT JOIN folders f ON f.id = n.folder_id \
             WHERE ($1::text IS NULL OR n.title LIKE $1 ESCAPE '\\') \
               AND ($2::bigint IS NULL OR n.folder_id = $2) \
             ORDER BY n.id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(pattern)
            .bind(params.folder_id)
            .fetch_all(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {NOTE_COLUMNS} \
             FROM notes n \
             LEFT JOIN folders f ON f.id = n.folder_id \
             WHERE n.id = $1"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new note, returning the created row.
    ///
    /// A `folder_id` that references no folder fails with a foreign key
    /// violation.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        content: Option<&str>,
        folder_id: Option<DbId>,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "WITH n AS ( \
                 INSERT INTO notes (title, content, folder_id) \
                 VALUES ($1, $2, $3) \
                 RETURNING {RAW_COLUMNS} \
             ) \
             SELECT {NOTE_COLUMNS} \
             FROM n \
             LEFT JOIN folders f ON f.id = n.folder_id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(title)
            .bind(content)
            .bind(folder_id)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable field of a note. `None` values clear the
    /// corresponding column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: &str,
        content: Option<&str>,
        folder_id: Option<DbId>,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "WITH n AS ( \
                 UPDATE notes SET title = $2, content = $3, folder_id = $4 \
                 WHERE id = $1 \
                 RETURNING {RAW_COLUMNS} \
             ) \
             SELECT {NOTE_COLUMNS} \
             FROM n \
             LEFT JOIN folders f ON f.id = n.folder_id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(title)
            .bind(content)
            .bind(folder_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build a `LIKE` pattern matching any string that contains `term`.
///
/// `%`, `_` and the escape character itself are escaped so the term is
/// matched literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_term_is_wrapped_in_wildcards() {
        assert_eq!(contains_pattern("about cats"), "%about cats%");
    }

    #[test]
    fn wildcards_in_term_are_escaped() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\dir"), "%c:\\\\dir%");
    }
}
