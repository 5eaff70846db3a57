//! Persistence layer for the catalog API.
//!
//! Repositories are zero-sized structs with async methods taking a pool or
//! connection. Multi-table writes go through [`writer::EntityWriter`], which
//! owns the transaction boundary.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod relation;
pub mod repositories;
pub mod writer;

pub use error::DbError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
