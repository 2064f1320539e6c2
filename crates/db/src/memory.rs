//! [`GameStore`] kept entirely in process memory.
//!
//! Mirrors the PostgreSQL behaviour the handlers rely on: sequential id
//! assignment, genre foreign-key enforcement, joined genre on list, no join
//! on point lookup. Used by the HTTP integration tests and for running the
//! server without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use gamestore_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::game::Game;
use crate::models::genre::Genre;
use crate::store::GameStore;

/// Genres seeded by the baseline schema, in id order starting at 1.
pub const DEFAULT_GENRES: [&str; 5] = [
    "Fighting",
    "Roleplaying",
    "Sports",
    "Racing",
    "Kids and Family",
];

#[derive(Default)]
struct Tables {
    games: BTreeMap<DbId, Game>,
    genres: BTreeMap<DbId, Genre>,
    last_game_id: DbId,
}

/// In-memory persistence context. Writes are visible as soon as the call
/// returns.
#[derive(Default)]
pub struct MemoryGameStore {
    tables: RwLock<Tables>,
}

impl MemoryGameStore {
    /// An empty store with no genres.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding exactly the given genres and no games.
    pub fn with_genres(genres: impl IntoIterator<Item = Genre>) -> Self {
        let tables = Tables {
            genres: genres.into_iter().map(|g| (g.id, g)).collect(),
            ..Tables::default()
        };
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// A store holding the same genres the baseline schema seeds.
    pub fn seeded() -> Self {
        Self::with_genres(DEFAULT_GENRES.iter().zip(1..).map(|(name, id)| Genre {
            id,
            name: (*name).to_string(),
        }))
    }
}

fn check_genre(tables: &Tables, genre_id: DbId) -> StoreResult<()> {
    if tables.genres.contains_key(&genre_id) {
        Ok(())
    } else {
        Err(StoreError::UnknownGenre(genre_id))
    }
}

/// Copy of `game` as a table row: relationships are never stored.
fn as_row(game: &Game, id: DbId) -> Game {
    Game {
        id,
        genre: None,
        ..game.clone()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn list_games(&self) -> StoreResult<Vec<Game>> {
        let tables = self.tables.read().await;
        let games = tables
            .games
            .values()
            .map(|game| Game {
                genre: tables.genres.get(&game.genre_id).cloned(),
                ..game.clone()
            })
            .collect();
        Ok(games)
    }

    async fn find_game(&self, id: DbId) -> StoreResult<Option<Game>> {
        Ok(self.tables.read().await.games.get(&id).cloned())
    }

    async fn insert_game(&self, game: &Game) -> StoreResult<Game> {
        let mut tables = self.tables.write().await;
        check_genre(&tables, game.genre_id)?;

        tables.last_game_id += 1;
        let row = as_row(game, tables.last_game_id);
        tables.games.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_game(&self, game: &Game) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.games.contains_key(&game.id) {
            return Ok(false);
        }
        check_genre(&tables, game.genre_id)?;

        tables.games.insert(game.id, as_row(game, game.id));
        Ok(true)
    }

    async fn delete_game(&self, id: DbId) -> StoreResult<u64> {
        let removed = self.tables.write().await.games.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn list_genres(&self) -> StoreResult<Vec<Genre>> {
        Ok(self.tables.read().await.genres.values().cloned().collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
