//! Entity structs mirroring the catalog tables.
//!
//! Entities are owned by the persistence layer. The HTTP layer never
//! serializes them directly; it maps them to transfer objects first.

pub mod game;
pub mod genre;
