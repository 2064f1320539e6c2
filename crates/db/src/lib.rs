//! Persistence layer for the game catalog.
//!
//! Exposes the entity model, the [`GameStore`] contract the HTTP layer
//! depends on, a PostgreSQL implementation built on plain repositories, and
//! an in-memory implementation for tests and local runs.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryGameStore;
pub use postgres::PgGameStore;
pub use store::GameStore;

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

/// Apply the bundled catalog schema.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
