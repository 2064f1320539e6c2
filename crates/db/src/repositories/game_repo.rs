//! Repository for the `games` table.
//!
//! Reads run directly against the pool. Writes take a connection so the
//! caller decides the transaction boundary and when to commit.

use gamestore_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::game::{Game, GameWithGenreRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genre_id, price, release_date";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// List every game with its genre name joined in, ordered by id.
    pub async fn list_with_genre(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let rows = sqlx::query_as::<_, GameWithGenreRow>(
            "SELECT g.id, g.name, g.genre_id, g.price, g.release_date, \
                    ge.name AS genre_name \
             FROM games g \
             LEFT JOIN genres ge ON ge.id = g.genre_id \
             ORDER BY g.id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    /// Find a game by its internal ID. The genre relationship is not loaded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new game, returning the created row with its assigned id.
    ///
    /// Any id already set on `game` is ignored.
    pub async fn create(conn: &mut PgConnection, game: &Game) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (name, genre_id, price, release_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&game.name)
            .bind(game.genre_id)
            .bind(game.price)
            .bind(game.release_date)
            .fetch_one(conn)
            .await
    }

    /// Overwrite every mutable column of the row identified by `game.id`.
    ///
    /// Returns `None` if no row with that id exists.
    pub async fn update(conn: &mut PgConnection, game: &Game) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET \
                name = $2, \
                genre_id = $3, \
                price = $4, \
                release_date = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(game.id)
            .bind(&game.name)
            .bind(game.genre_id)
            .bind(game.price)
            .bind(game.release_date)
            .fetch_optional(conn)
            .await
    }

    /// Delete the game with the given id. Returns the number of rows removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
