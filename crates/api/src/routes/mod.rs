pub mod game;
pub mod genre;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games          list, create
/// /games/{id}     get, update, delete
/// /genres         list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", game::router())
        .nest("/genres", genre::router())
}
