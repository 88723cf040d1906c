use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::VoteData;
use crate::domain::movie::models::MovieId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_votes(
    State(state): State<AppState>,
    movie_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<Vec<VoteData>>, ApiError> {
    let Path(movie_id) = movie_id?;

    state
        .vote_service
        .list_votes(MovieId(movie_id))
        .await
        .map_err(ApiError::from)
        .map(|votes| ApiSuccess::new(StatusCode::OK, votes.iter().map(VoteData::from).collect()))
}
