use thiserror::Error;

use crate::movie::errors::MovieError;
use crate::movie::models::MovieId;
use crate::user::errors::UserError;

/// Top-level error type for all vote-related operations
#[derive(Debug, Clone, Error)]
pub enum VoteError {
    #[error("Invalid vote value: {0} (must be between 1 and 10)")]
    InvalidValue(i32),

    #[error("Movie not found with id: {0}")]
    MovieNotFound(MovieId),

    #[error("Voter not found: {0}")]
    VoterNotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<MovieError> for VoteError {
    fn from(error: MovieError) -> Self {
        match error {
            MovieError::NotFound(id) => VoteError::MovieNotFound(id),
            other => VoteError::DatabaseError(other.to_string()),
        }
    }
}

impl From<UserError> for VoteError {
    fn from(error: UserError) -> Self {
        VoteError::DatabaseError(error.to_string())
    }
}
