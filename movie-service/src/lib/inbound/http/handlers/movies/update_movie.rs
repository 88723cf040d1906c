use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::MovieData;
use super::MovieRequestBody;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::UpdateMovieCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Replace a movie. The path id wins over any id in the body.
pub async fn update_movie(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<MovieRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<MovieData>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let command = UpdateMovieCommand {
        id: MovieId(id),
        details: body.try_into_details()?,
    };

    state
        .movie_service
        .update_movie(command)
        .await
        .map_err(ApiError::from)
        .map(|ref movie| ApiSuccess::new(StatusCode::OK, movie.into()))
}
