use axum::extract::State;
use axum::http::StatusCode;

use super::GenreData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_genres(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<GenreData>>, ApiError> {
    state
        .genre_service
        .list_genres()
        .await
        .map_err(ApiError::from)
        .map(|genres| ApiSuccess::new(StatusCode::OK, genres.iter().map(GenreData::from).collect()))
}
