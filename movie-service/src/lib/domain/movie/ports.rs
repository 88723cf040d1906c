use async_trait::async_trait;

use crate::domain::movie::models::CreateMovieCommand;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::MovieName;
use crate::domain::movie::models::UpdateMovieCommand;
use crate::movie::errors::MovieError;

/// Port for movie domain service operations.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// List every movie with its genres, actors and rating.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;

    /// Retrieve movie by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_movie(&self, id: MovieId) -> Result<Movie, MovieError>;

    /// Retrieve movie by exact name.
    ///
    /// # Errors
    /// * `NotFoundByName` - No movie with this name
    /// * `DatabaseError` - Database operation failed
    async fn get_movie_by_name(&self, name: &MovieName) -> Result<Movie, MovieError>;

    /// Add a movie. Rating starts at zero.
    ///
    /// # Arguments
    /// * `command` - Optional client id and validated details
    ///
    /// # Returns
    /// Persisted movie with its final id
    ///
    /// # Errors
    /// * `AlreadyExists` - A movie with the supplied id exists
    /// * `NameAlreadyExists` - A movie with the same name exists
    /// * `UnknownGenres` - Some referenced genres do not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_movie(&self, command: CreateMovieCommand) -> Result<Movie, MovieError>;

    /// Replace a movie's editable fields, keeping its rating.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    /// * `NameAlreadyExists` - Another movie owns the name
    /// * `UnknownGenres` - Some referenced genres do not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_movie(&self, command: UpdateMovieCommand) -> Result<Movie, MovieError>;

    /// Remove a movie together with its genre links and votes.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_movie(&self, id: MovieId) -> Result<(), MovieError>;
}

/// Persistence operations for movies.
///
/// Implementations store genre links and actors alongside the movie row,
/// so every returned `Movie` is complete.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, MovieError>;

    async fn find_by_name(&self, name: &MovieName) -> Result<Option<Movie>, MovieError>;

    async fn exists(&self, id: MovieId) -> Result<bool, MovieError>;

    /// Whether a movie other than `excluding` carries this name.
    async fn exists_by_name(
        &self,
        name: &MovieName,
        excluding: Option<MovieId>,
    ) -> Result<bool, MovieError>;

    /// Persist a new movie and its genre links.
    ///
    /// # Errors
    /// * `AlreadyExists` / `NameAlreadyExists` - Unique constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateMovieCommand) -> Result<Movie, MovieError>;

    /// Replace editable fields and genre links.
    ///
    /// # Errors
    /// * `NotFound` - No row updated
    /// * `NameAlreadyExists` - Unique constraint on name violated
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, command: UpdateMovieCommand) -> Result<Movie, MovieError>;

    /// # Errors
    /// * `NotFound` - No row deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: MovieId) -> Result<(), MovieError>;
}
