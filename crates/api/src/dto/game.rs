use gamestore_core::game::{validate_name, validate_price};
use gamestore_core::types::{Date, DbId, Price};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// List view of a game, with the genre resolved to its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: DbId,
    pub name: String,
    /// `None` when the genre relationship was not loaded.
    pub genre: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Price,
    pub release_date: Date,
}

/// Single-resource view of a game, carrying the raw genre id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    pub id: DbId,
    pub name: String,
    pub genre_id: DbId,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Price,
    pub release_date: Date,
}

/// Body of `POST /games`. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(range(min = 1, message = "genreId must be a positive id"))]
    pub genre_id: DbId,
    #[validate(custom(function = "validate_price"))]
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Price,
    pub release_date: Date,
}

/// Body of `PUT /games/{id}`. The id comes from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGame {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(range(min = 1, message = "genreId must be a positive id"))]
    pub genre_id: DbId,
    #[validate(custom(function = "validate_price"))]
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Price,
    pub release_date: Date,
}
