use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::MovieData;
use super::MovieRequestBody;
use super::MOVIES_PATH;
use crate::domain::movie::models::CreateMovieCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<MovieRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<MovieData>, ApiError> {
    let Json(body) = body?;
    let command = CreateMovieCommand {
        id: body.id(),
        details: body.try_into_details()?,
    };

    state
        .movie_service
        .create_movie(command)
        .await
        .map_err(ApiError::from)
        .map(|ref movie| ApiSuccess::created(format!("{}/{}", MOVIES_PATH, movie.id), movie.into()))
}
