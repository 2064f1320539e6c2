use gamestore_core::types::DbId;
use serde::Serialize;

/// A genre as listed by `GET /genres`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreSummary {
    pub id: DbId,
    pub name: String,
}
