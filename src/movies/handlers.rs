use axum::{extract::State, http::StatusCode, Json};
use tracing::error;

use super::types::PopularMoviesResponse;
use crate::server::AppState;

pub async fn get_popular_movies(
    State(state): State<AppState>,
) -> Result<Json<PopularMoviesResponse>, StatusCode> {
    let response = state.movies.popular_movies_response().await.map_err(|e| {
        error!("Failed to load popular movies: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(response))
}
