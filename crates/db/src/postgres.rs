//! [`GameStore`] backed by PostgreSQL.

use async_trait::async_trait;
use gamestore_core::types::DbId;

use crate::error::StoreResult;
use crate::models::game::Game;
use crate::models::genre::Genre;
use crate::repositories::{GameRepo, GenreRepo};
use crate::store::GameStore;
use crate::DbPool;

/// PostgreSQL persistence context.
///
/// Each write runs in its own transaction which is committed before the
/// method returns. An early return drops the transaction and rolls it back.
#[derive(Clone)]
pub struct PgGameStore {
    pool: DbPool,
}

impl PgGameStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl GameStore for PgGameStore {
    async fn list_games(&self) -> StoreResult<Vec<Game>> {
        Ok(GameRepo::list_with_genre(&self.pool).await?)
    }

    async fn find_game(&self, id: DbId) -> StoreResult<Option<Game>> {
        Ok(GameRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_game(&self, game: &Game) -> StoreResult<Game> {
        let mut tx = self.pool.begin().await?;
        let created = GameRepo::create(&mut *tx, game).await?;
        tx.commit().await?;
        tracing::debug!(game_id = created.id, "Game row inserted");
        Ok(created)
    }

    async fn update_game(&self, game: &Game) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;
        if GameRepo::update(&mut *tx, game).await?.is_none() {
            return Ok(false);
        }
        tx.commit().await?;
        Ok(true)
    }

    async fn delete_game(&self, id: DbId) -> StoreResult<u64> {
        let mut tx = self.pool.begin().await?;
        let removed = GameRepo::delete(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(removed)
    }

    async fn list_genres(&self) -> StoreResult<Vec<Genre>> {
        Ok(GenreRepo::list(&self.pool).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
