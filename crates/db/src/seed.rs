//! Fixture loader used by the integration tests.
//!
//! [`reseed`] empties every Noteful table, restarts their identity
//! sequences and then runs a fixture script, so each test case starts from
//! the same known rows and the same next IDs.

use crate::DbPool;

/// The standard fixture: four folders, ten notes (IDs 1000-1009, four of
/// them titled "... about cats ...") and four tags.
pub const NOTEFUL_FIXTURE: &str = include_str!("../../../db/fixtures/noteful.sql");

/// Reset all tables and load `script`.
pub async fn reseed(pool: &DbPool, script: &str) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE notes_tags, notes, tags, folders RESTART IDENTITY CASCADE")
        .execute(pool)
        .await?;
    sqlx::raw_sql(script).execute(pool).await?;
    tracing::debug!("Fixture data loaded");
    Ok(())
}
