use std::fmt;

use crate::movie::models::MovieId;
use crate::movie::models::MovieRating;
use crate::user::models::UserId;
use crate::vote::errors::VoteError;

/// A user's rating of a movie. At most one exists per (user, movie).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote {
    pub id: VoteId,
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub value: VoteValue,
}

/// Vote unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoteId(pub i64);

impl fmt::Display for VoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Vote value in the inclusive range 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VoteValue(i32);

impl VoteValue {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    /// # Errors
    /// * `InvalidValue` - Value outside 1..=10
    pub fn new(value: i32) -> Result<Self, VoteError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(VoteError::InvalidValue(value))
        }
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

/// Vote to be upserted for a (user, movie) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewVote {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub value: VoteValue,
}

/// Stored vote together with the movie's recomputed rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastVoteOutcome {
    pub vote: Vote,
    pub rating: MovieRating,
}
