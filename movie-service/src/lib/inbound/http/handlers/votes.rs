use serde::Deserialize;
use serde::Serialize;

use crate::domain::movie::models::MovieRating;
use crate::domain::vote::models::Vote;

pub mod cast_vote;
pub mod list_votes;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CastVoteRequestBody {
    value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteData {
    pub id: i64,
    pub user_id: i64,
    pub movie_id: i64,
    pub value: i32,
}

impl From<&Vote> for VoteData {
    fn from(vote: &Vote) -> Self {
        Self {
            id: vote.id.0,
            user_id: vote.user_id.0,
            movie_id: vote.movie_id.0,
            value: vote.value.get(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastVoteResponseData {
    pub vote: VoteData,
    pub score: f32,
    pub votes: i32,
}

impl CastVoteResponseData {
    fn new(vote: &Vote, rating: MovieRating) -> Self {
        Self {
            vote: vote.into(),
            score: rating.score,
            votes: rating.votes,
        }
    }
}
