//! Integration tests for the PostgreSQL persistence context.
//!
//! These need a reachable server via `DATABASE_URL`; run them with
//! `cargo test -p gamestore-db -- --ignored`.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use gamestore_core::types::UNASSIGNED_ID;
use gamestore_db::models::game::Game;
use gamestore_db::{GameStore, PgGameStore, StoreError};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_game(name: &str, genre_id: i64) -> Game {
    Game {
        id: UNASSIGNED_ID,
        name: name.to_string(),
        genre_id,
        price: Decimal::new(2499, 2),
        release_date: NaiveDate::from_ymd_opt(2020, 9, 17).unwrap(),
        genre: None,
    }
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_schema_seeds_genres(pool: PgPool) {
    gamestore_db::health_check(&pool).await.unwrap();

    let store = PgGameStore::new(pool);
    let genres = store.list_genres().await.unwrap();
    let names: Vec<_> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, gamestore_db::memory::DEFAULT_GENRES);
}

// ---------------------------------------------------------------------------
// Game CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_then_find(pool: PgPool) {
    let store = PgGameStore::new(pool);

    let created = store.insert_game(&new_game("Hades", 1)).await.unwrap();
    assert!(created.is_persisted());
    assert_eq!(created.price, Decimal::new(2499, 2));

    let found = store.find_game(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert!(found.genre.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_list_joins_genre_name(pool: PgPool) {
    let store = PgGameStore::new(pool);
    store.insert_game(&new_game("Street Fighter II", 1)).await.unwrap();
    store.insert_game(&new_game("FIFA 23", 3)).await.unwrap();

    let games = store.list_games().await.unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].genre.as_ref().unwrap().name, "Fighting");
    assert_eq!(games[1].genre.as_ref().unwrap().name, "Sports");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_overwrites_and_preserves_id(pool: PgPool) {
    let store = PgGameStore::new(pool);
    let created = store.insert_game(&new_game("Hades", 1)).await.unwrap();

    let mut changed = new_game("Hades II", 2);
    changed.id = created.id;
    changed.price = Decimal::new(2999, 2);
    assert!(store.update_game(&changed).await.unwrap());

    let found = store.find_game(created.id).await.unwrap().unwrap();
    assert_eq!(found, changed);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_row_returns_false(pool: PgPool) {
    let store = PgGameStore::new(pool);
    let mut game = new_game("Ghost", 1);
    game.id = 999_999;

    assert!(!store.update_game(&game).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_twice(pool: PgPool) {
    let store = PgGameStore::new(pool);
    let created = store.insert_game(&new_game("Hades", 1)).await.unwrap();

    assert_eq!(store.delete_game(created.id).await.unwrap(), 1);
    assert_eq!(store.delete_game(created.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_unknown_genre_violates_foreign_key(pool: PgPool) {
    let store = PgGameStore::new(pool);

    let err = store.insert_game(&new_game("Orphan", 999)).await.unwrap_err();
    assert_matches!(err, StoreError::Database(sqlx::Error::Database(ref db))
        if db.code().as_deref() == Some("23503"));
}
