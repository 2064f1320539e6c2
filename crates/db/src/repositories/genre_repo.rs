//! Repository for the `genres` lookup table.

use sqlx::PgPool;

use crate::models::genre::Genre;

const COLUMNS: &str = "id, name";

/// Read-only access to genres; the service never mutates them.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }
}
