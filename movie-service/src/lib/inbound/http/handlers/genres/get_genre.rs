use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::GenreData;
use crate::domain::genre::models::GenreId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_genre(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<GenreData>, ApiError> {
    let Path(id) = id?;

    state
        .genre_service
        .get_genre(GenreId(id))
        .await
        .map_err(ApiError::from)
        .map(|ref genre| ApiSuccess::new(StatusCode::OK, genre.into()))
}
