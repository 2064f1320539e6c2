use gamestore_core::types::DbId;

/// Failures surfaced by a [`GameStore`](crate::store::GameStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Any error raised by the PostgreSQL driver, including constraint
    /// violations.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A game referenced a genre id the store does not know.
    #[error("Genre with id {0} does not exist")]
    UnknownGenre(DbId),
}

/// Convenience alias for persistence results.
pub type StoreResult<T> = Result<T, StoreError>;
