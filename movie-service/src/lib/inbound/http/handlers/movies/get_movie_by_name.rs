use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::MovieData;
use crate::domain::movie::models::MovieName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::movie::errors::MovieError;

pub async fn get_movie_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<MovieData>, ApiError> {
    let name = MovieName::new(name).map_err(MovieError::from)?;

    state
        .movie_service
        .get_movie_by_name(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref movie| ApiSuccess::new(StatusCode::OK, movie.into()))
}
