use gamestore_core::types::DbId;
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}
