use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::GenreData;
use super::GenreRequestBody;
use super::GENRES_PATH;
use crate::domain::genre::models::CreateGenreCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_genre(
    State(state): State<AppState>,
    body: Result<Json<GenreRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<GenreData>, ApiError> {
    let Json(body) = body?;
    let command = CreateGenreCommand {
        id: body.id(),
        name: body.try_into_name()?,
    };

    state
        .genre_service
        .create_genre(command)
        .await
        .map_err(ApiError::from)
        .map(|ref genre| ApiSuccess::created(format!("{}/{}", GENRES_PATH, genre.id), genre.into()))
}
