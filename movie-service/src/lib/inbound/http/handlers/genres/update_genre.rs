use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::GenreData;
use super::GenreRequestBody;
use crate::domain::genre::models::GenreId;
use crate::domain::genre::models::UpdateGenreCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_genre(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<GenreRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<GenreData>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let command = UpdateGenreCommand {
        id: GenreId(id),
        name: body.try_into_name()?,
    };

    state
        .genre_service
        .update_genre(command)
        .await
        .map_err(ApiError::from)
        .map(|ref genre| ApiSuccess::new(StatusCode::OK, genre.into()))
}
