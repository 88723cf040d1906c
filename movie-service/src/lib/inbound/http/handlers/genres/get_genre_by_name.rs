use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::GenreData;
use crate::domain::genre::models::GenreName;
use crate::genre::errors::GenreError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_genre_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<GenreData>, ApiError> {
    let name = GenreName::new(name).map_err(GenreError::from)?;

    state
        .genre_service
        .get_genre_by_name(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref genre| ApiSuccess::new(StatusCode::OK, genre.into()))
}
