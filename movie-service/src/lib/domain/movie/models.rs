use std::fmt;

use chrono::NaiveDate;

use crate::genre::models::GenreId;
use crate::movie::errors::MovieError;
use crate::movie::errors::MovieNameError;

/// Movie aggregate entity.
///
/// `rating` is derived from the votes cast on the movie and is never
/// written through the catalogue operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub details: MovieDetails,
    pub rating: MovieRating,
}

/// Movie unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(pub i64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Movie name value type
///
/// Non-blank and at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieName(String);

impl MovieName {
    const MAX_LENGTH: usize = 100;

    /// Create a new validated movie name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, MovieNameError> {
        if name.trim().is_empty() {
            return Err(MovieNameError::Empty);
        }

        let actual = name.chars().count();
        if actual > Self::MAX_LENGTH {
            return Err(MovieNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Editable movie fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub name: MovieName,
    /// Running time in minutes
    pub duration: i32,
    pub director: Option<String>,
    pub synopsis: Option<String>,
    pub language: Option<String>,
    pub classification: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub genres: Vec<GenreId>,
    pub actors: Vec<String>,
}

impl MovieDetails {
    /// Validate and normalise editable fields.
    ///
    /// Genre ids are sorted and deduplicated.
    ///
    /// # Errors
    /// * `InvalidDuration` - Duration is negative
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: MovieName,
        duration: i32,
        director: Option<String>,
        synopsis: Option<String>,
        language: Option<String>,
        classification: Option<String>,
        release_date: Option<NaiveDate>,
        image: Option<String>,
        mut genres: Vec<GenreId>,
        actors: Vec<String>,
    ) -> Result<Self, MovieError> {
        if duration < 0 {
            return Err(MovieError::InvalidDuration(duration));
        }

        genres.sort();
        genres.dedup();

        Ok(Self {
            name,
            duration,
            director,
            synopsis,
            language,
            classification,
            release_date,
            image,
            genres,
            actors,
        })
    }
}

/// Aggregate rating: mean vote value and vote count.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovieRating {
    pub score: f32,
    pub votes: i32,
}

/// Command to add a movie. The id is optional; the store generates one when absent.
#[derive(Debug, Clone)]
pub struct CreateMovieCommand {
    pub id: Option<MovieId>,
    pub details: MovieDetails,
}

/// Command to replace an existing movie's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateMovieCommand {
    pub id: MovieId,
    pub details: MovieDetails,
}
