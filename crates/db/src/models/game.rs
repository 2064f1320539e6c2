use gamestore_core::types::{Date, DbId, Price, UNASSIGNED_ID};
use sqlx::FromRow;

use super::genre::Genre;

/// A row from the `games` table.
///
/// `genre` is only populated by queries that join `genres`; a point lookup
/// leaves it as `None` and callers fall back to `genre_id`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Game {
    pub id: DbId,
    pub name: String,
    pub genre_id: DbId,
    pub price: Price,
    pub release_date: Date,
    #[sqlx(skip)]
    pub genre: Option<Genre>,
}

impl Game {
    /// Whether the store has assigned this entity an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_ID
    }
}

/// A `games` row joined with the name of its genre.
///
/// The join is a `LEFT JOIN`, so `genre_name` is `None` when the referenced
/// genre row is missing.
#[derive(Debug, FromRow)]
pub struct GameWithGenreRow {
    #[sqlx(flatten)]
    pub game: Game,
    pub genre_name: Option<String>,
}

impl From<GameWithGenreRow> for Game {
    fn from(row: GameWithGenreRow) -> Self {
        let GameWithGenreRow { mut game, genre_name } = row;
        game.genre = genre_name.map(|name| Genre {
            id: game.genre_id,
            name,
        });
        game
    }
}
