//! Handlers for the `/games` resource.
//!
//! Each handler makes one persistence call (plus mapping) and returns once
//! the store has committed any change it made.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use gamestore_core::error::CoreError;
use gamestore_core::types::DbId;

use crate::dto::game::{CreateGame, GameDetails, GameSummary, UpdateGame};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::mapping;
use crate::state::AppState;

/// Value of the `Location` header pointing at a single game.
pub fn game_location(id: DbId) -> String {
    format!("/games/{id}")
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Game", id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /games
///
/// List every game with its genre name.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GameSummary>>> {
    let games = state.store.list_games().await?;
    Ok(Json(games.iter().map(mapping::to_game_summary).collect()))
}

/// GET /games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GameDetails>> {
    let game = state.store.find_game(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(mapping::to_game_details(&game)))
}

/// POST /games
///
/// Create a game; responds 201 with a `Location` header and the stored row.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateGame>,
) -> AppResult<impl IntoResponse> {
    let game = state
        .store
        .insert_game(&mapping::create_to_entity(input))
        .await?;

    tracing::info!(game_id = game.id, genre_id = game.genre_id, "Game created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, game_location(game.id))],
        Json(mapping::to_game_details(&game)),
    ))
}

/// PUT /games/{id}
///
/// Overwrite every field of an existing game. The id is taken from the path.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateGame>,
) -> AppResult<StatusCode> {
    let updated = state
        .store
        .update_game(&mapping::update_to_entity(input, id))
        .await?;
    if !updated {
        return Err(not_found(id));
    }

    tracing::info!(game_id = id, "Game updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /games/{id}
///
/// Always 204: deleting an id that does not exist is not an error.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = state.store.delete_game(id).await?;
    tracing::info!(game_id = id, removed, "Game deleted");
    Ok(StatusCode::NO_CONTENT)
}
