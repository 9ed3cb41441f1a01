//! PostgreSQL storage for the Sakila service.
//!
//! Layout, leaf-first:
//! - [`entities`]: `FromRow` row structs, converted to/from domain models
//! - [`datasources`]: the SQL, one struct per table
//! - [`repositories`]: `sakila_core` repository traits implemented by
//!   delegating to the datasources

pub mod datasources;
pub mod entities;
pub mod repositories;

mod error;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
