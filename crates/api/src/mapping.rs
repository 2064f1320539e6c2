//! Conversions between entities and transfer objects.
//!
//! Pure functions only: no I/O, no shared state. Every DTO produced here is
//! an owned copy, so later changes to either side never leak into the other.

use gamestore_core::types::{DbId, UNASSIGNED_ID};
use gamestore_db::models::game::Game;
use gamestore_db::models::genre::Genre;

use crate::dto::game::{CreateGame, GameDetails, GameSummary, UpdateGame};
use crate::dto::genre::GenreSummary;

/// Single-resource view of `game`.
pub fn to_game_details(game: &Game) -> GameDetails {
    GameDetails {
        id: game.id,
        name: game.name.clone(),
        genre_id: game.genre_id,
        price: game.price,
        release_date: game.release_date,
    }
}

/// List view of `game`.
///
/// The caller must have loaded the genre relationship; if it did not, the
/// genre name is `None` rather than an error.
pub fn to_game_summary(game: &Game) -> GameSummary {
    GameSummary {
        id: game.id,
        name: game.name.clone(),
        genre: game.genre.as_ref().map(|genre| genre.name.clone()),
        price: game.price,
        release_date: game.release_date,
    }
}

/// New, not yet persisted entity built from a create request.
pub fn create_to_entity(input: CreateGame) -> Game {
    Game {
        id: UNASSIGNED_ID,
        name: input.name,
        genre_id: input.genre_id,
        price: input.price,
        release_date: input.release_date,
        genre: None,
    }
}

/// Replacement values for the existing game `id`.
pub fn update_to_entity(input: UpdateGame, id: DbId) -> Game {
    Game {
        id,
        name: input.name,
        genre_id: input.genre_id,
        price: input.price,
        release_date: input.release_date,
        genre: None,
    }
}

pub fn to_genre_summary(genre: &Genre) -> GenreSummary {
    GenreSummary {
        id: genre.id,
        name: genre.name.clone(),
    }
}
