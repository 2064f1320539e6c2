//! Handlers for the read-only `/genres` resource.

use axum::extract::State;
use axum::Json;

use crate::dto::genre::GenreSummary;
use crate::error::AppResult;
use crate::mapping;
use crate::state::AppState;

/// GET /genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GenreSummary>>> {
    let genres = state.store.list_genres().await?;
    Ok(Json(genres.iter().map(mapping::to_genre_summary).collect()))
}
