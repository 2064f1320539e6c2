//! The persistence context contract used by the HTTP handlers.

use async_trait::async_trait;
use gamestore_core::types::DbId;

use crate::error::StoreResult;
use crate::models::game::Game;
use crate::models::genre::Genre;

/// Queries and change persistence against the catalog tables.
///
/// Every mutating method has committed its changes by the time it returns
/// `Ok`; a caller never observes a success for work that is still pending.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// All games with their genre relationship loaded. Read-only.
    async fn list_games(&self) -> StoreResult<Vec<Game>>;

    /// Point lookup by id. The genre relationship is not loaded.
    async fn find_game(&self, id: DbId) -> StoreResult<Option<Game>>;

    /// Insert `game`, ignoring its id, and return the stored row with the
    /// id the store assigned.
    async fn insert_game(&self, game: &Game) -> StoreResult<Game>;

    /// Overwrite all fields of the existing row with id `game.id`.
    ///
    /// Returns `false` when no such row exists; nothing is written then.
    async fn update_game(&self, game: &Game) -> StoreResult<bool>;

    /// Delete every game matching `id`, returning how many rows went away.
    async fn delete_game(&self, id: DbId) -> StoreResult<u64>;

    /// All genres, ordered by id.
    async fn list_genres(&self) -> StoreResult<Vec<Genre>>;

    /// Cheap liveness probe of the backing store.
    async fn ping(&self) -> StoreResult<()>;
}
