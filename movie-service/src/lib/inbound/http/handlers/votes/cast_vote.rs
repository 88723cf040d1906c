use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::CastVoteRequestBody;
use super::CastVoteResponseData;
use crate::domain::movie::models::MovieId;
use crate::domain::vote::models::VoteValue;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn cast_vote(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    movie_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CastVoteRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<CastVoteResponseData>, ApiError> {
    let Path(movie_id) = movie_id?;
    let Json(body) = body?;
    let value = VoteValue::new(body.value)?;

    state
        .vote_service
        .cast_vote(&user.email, MovieId(movie_id), value)
        .await
        .map_err(ApiError::from)
        .map(|outcome| {
            ApiSuccess::new(
                StatusCode::OK,
                CastVoteResponseData::new(&outcome.vote, outcome.rating),
            )
        })
}
