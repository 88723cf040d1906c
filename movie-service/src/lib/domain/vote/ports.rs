use async_trait::async_trait;

use crate::domain::movie::models::MovieId;
use crate::domain::vote::models::CastVoteOutcome;
use crate::domain::vote::models::NewVote;
use crate::domain::vote::models::Vote;
use crate::domain::vote::models::VoteValue;
use crate::movie::models::MovieRating;
use crate::vote::errors::VoteError;

/// Port for voting operations.
#[async_trait]
pub trait VoteServicePort: Send + Sync + 'static {
    /// Record or replace the voter's vote on a movie.
    ///
    /// # Arguments
    /// * `voter_email` - Subject of the caller's access token
    /// * `movie_id` - Movie being rated
    /// * `value` - Validated vote value
    ///
    /// # Returns
    /// The stored vote and the movie's new rating
    ///
    /// # Errors
    /// * `MovieNotFound` - Movie does not exist
    /// * `VoterNotFound` - No user with the token's email
    /// * `DatabaseError` - Database operation failed
    async fn cast_vote(
        &self,
        voter_email: &str,
        movie_id: MovieId,
        value: VoteValue,
    ) -> Result<CastVoteOutcome, VoteError>;

    /// List all votes on a movie.
    ///
    /// # Errors
    /// * `MovieNotFound` - Movie does not exist
    /// * `DatabaseError` - Database operation failed
    async fn list_votes(&self, movie_id: MovieId) -> Result<Vec<Vote>, VoteError>;
}

/// Persistence operations for votes.
#[async_trait]
pub trait VoteRepository: Send + Sync + 'static {
    /// Insert or replace the (user, movie) vote and recompute the movie's
    /// score and vote count atomically.
    ///
    /// # Errors
    /// * `MovieNotFound` - Movie row vanished before the write
    /// * `DatabaseError` - Database operation failed
    async fn upsert(&self, vote: NewVote) -> Result<(Vote, MovieRating), VoteError>;

    async fn list_by_movie(&self, movie_id: MovieId) -> Result<Vec<Vote>, VoteError>;
}
