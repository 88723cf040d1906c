use thiserror::Error;

use crate::genre::models::GenreId;

/// Error type for GenreName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenreNameError {
    #[error("Genre name is empty")]
    Empty,

    #[error("Genre name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error type for all genre-related operations
#[derive(Debug, Clone, Error)]
pub enum GenreError {
    #[error("Invalid genre name: {0}")]
    InvalidName(#[from] GenreNameError),

    #[error("Genre not found with id: {0}")]
    NotFound(GenreId),

    #[error("Genre not found with name: {0}")]
    NotFoundByName(String),

    #[error("Genre already exists with id: {0}")]
    AlreadyExists(GenreId),

    #[error("Genre already exists with name: {0}")]
    NameAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
