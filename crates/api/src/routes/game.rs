//! Route definitions for games.

use axum::routing::get;
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(game::list).post(game::create))
        .route(
            "/{id}",
            get(game::get_by_id).put(game::update).delete(game::delete),
        )
}
