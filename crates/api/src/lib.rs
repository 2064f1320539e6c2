//! Game store API server library.
//!
//! Exposes the building blocks (config, state, error handling, DTOs, mapping,
//! routes) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod mapping;
pub mod router;
pub mod routes;
pub mod state;
