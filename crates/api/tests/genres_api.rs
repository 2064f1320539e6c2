//! HTTP-level integration tests for the read-only `/genres` resource.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get};
use gamestore_db::MemoryGameStore;
use serde_json::json;

#[tokio::test]
async fn test_list_genres_returns_seeded_genres() {
    let app = common::build_test_app(Arc::new(MemoryGameStore::seeded()));

    let response = get(app, "/genres").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {"id": 1, "name": "Fighting"},
            {"id": 2, "name": "Roleplaying"},
            {"id": 3, "name": "Sports"},
            {"id": 4, "name": "Racing"},
            {"id": 5, "name": "Kids and Family"}
        ])
    );
}

#[tokio::test]
async fn test_list_genres_on_empty_store() {
    let app = common::build_test_app(Arc::new(MemoryGameStore::new()));

    let response = get(app, "/genres").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
