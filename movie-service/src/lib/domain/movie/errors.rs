use thiserror::Error;

use crate::genre::errors::GenreError;
use crate::genre::models::GenreId;
use crate::movie::models::MovieId;

/// Error type for MovieName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieNameError {
    #[error("Movie name is empty")]
    Empty,

    #[error("Movie name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error type for all movie-related operations
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Invalid movie name: {0}")]
    InvalidName(#[from] MovieNameError),

    #[error("Invalid duration: {0} (must not be negative)")]
    InvalidDuration(i32),

    #[error("Movie not found with id: {0}")]
    NotFound(MovieId),

    #[error("Movie not found with name: {0}")]
    NotFoundByName(String),

    #[error("Movie already exists with id: {0}")]
    AlreadyExists(MovieId),

    #[error("Movie already exists with name: {0}")]
    NameAlreadyExists(String),

    #[error("Unknown genre ids: {}", join_ids(.0))]
    UnknownGenres(Vec<GenreId>),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<GenreError> for MovieError {
    fn from(error: GenreError) -> Self {
        MovieError::DatabaseError(error.to_string())
    }
}

fn join_ids(ids: &[GenreId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
