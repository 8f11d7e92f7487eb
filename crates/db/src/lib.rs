//! Persistence layer for Noteful: pool lifecycle, row models and one
//! repository per table.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Bounds for the connection pool. These are fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct PoolBounds {
    pub min_connections: u32,
    pub max_connections: u32,
}

impl Default for PoolBounds {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 2,
        }
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, bounds: PoolBounds) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(bounds.min_connections)
        .max_connections(bounds.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
