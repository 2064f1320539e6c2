//! Domain primitives shared by the persistence and HTTP layers.

pub mod error;
pub mod game;
pub mod types;
