use std::sync::Arc;

use gamestore_db::GameStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence context for games and genres.
    pub store: Arc<dyn GameStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }
}
