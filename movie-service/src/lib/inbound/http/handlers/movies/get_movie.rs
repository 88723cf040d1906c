use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::MovieData;
use crate::domain::movie::models::MovieId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_movie(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<MovieData>, ApiError> {
    let Path(id) = id?;

    state
        .movie_service
        .get_movie(MovieId(id))
        .await
        .map_err(ApiError::from)
        .map(|ref movie| ApiSuccess::new(StatusCode::OK, movie.into()))
}
