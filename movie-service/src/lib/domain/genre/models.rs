use std::fmt;

use crate::genre::errors::GenreNameError;

/// Movie genre (Action, Drama, Comedy, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: GenreId,
    pub name: GenreName,
}

/// Genre unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenreId(pub i64);

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Genre name value type
///
/// Ensures the name is not blank and fits the 50 character column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreName(String);

impl GenreName {
    const MAX_LENGTH: usize = 50;

    /// Create a new validated genre name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace
    /// * `TooLong` - Name longer than 50 characters
    pub fn new(name: String) -> Result<Self, GenreNameError> {
        if name.trim().is_empty() {
            return Err(GenreNameError::Empty);
        }

        let actual = name.chars().count();
        if actual > Self::MAX_LENGTH {
            return Err(GenreNameError::TooLong {
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

impl fmt::Display for GenreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to add a genre. The id is optional; the store generates one when absent.
#[derive(Debug, Clone)]
pub struct CreateGenreCommand {
    pub id: Option<GenreId>,
    pub name: GenreName,
}

/// Command to replace an existing genre's fields.
#[derive(Debug, Clone)]
pub struct UpdateGenreCommand {
    pub id: GenreId,
    pub name: GenreName,
}
