use async_trait::async_trait;

use crate::domain::genre::models::CreateGenreCommand;
use crate::domain::genre::models::Genre;
use crate::domain::genre::models::GenreId;
use crate::domain::genre::models::GenreName;
use crate::domain::genre::models::UpdateGenreCommand;
use crate::genre::errors::GenreError;

/// Port for genre domain service operations.
#[async_trait]
pub trait GenreServicePort: Send + Sync + 'static {
    /// List every genre.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_genres(&self) -> Result<Vec<Genre>, GenreError>;

    /// Retrieve genre by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Genre does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_genre(&self, id: GenreId) -> Result<Genre, GenreError>;

    /// Retrieve genre by exact name.
    ///
    /// # Errors
    /// * `NotFoundByName` - No genre with this name
    /// * `DatabaseError` - Database operation failed
    async fn get_genre_by_name(&self, name: &GenreName) -> Result<Genre, GenreError>;

    /// Add a genre.
    ///
    /// # Errors
    /// * `AlreadyExists` - A genre with the supplied id exists
    /// * `NameAlreadyExists` - A genre with the same name exists
    /// * `DatabaseError` - Database operation failed
    async fn create_genre(&self, command: CreateGenreCommand) -> Result<Genre, GenreError>;

    /// Replace a genre's fields.
    ///
    /// # Errors
    /// * `NotFound` - Genre does not exist
    /// * `NameAlreadyExists` - Another genre owns the name
    /// * `DatabaseError` - Database operation failed
    async fn update_genre(&self, command: UpdateGenreCommand) -> Result<Genre, GenreError>;

    /// Remove a genre.
    ///
    /// # Errors
    /// * `NotFound` - Genre does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_genre(&self, id: GenreId) -> Result<(), GenreError>;
}

/// Persistence operations for genres.
#[async_trait]
pub trait GenreRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Genre>, GenreError>;

    async fn find_by_id(&self, id: GenreId) -> Result<Option<Genre>, GenreError>;

    async fn find_by_name(&self, name: &GenreName) -> Result<Option<Genre>, GenreError>;

    async fn exists(&self, id: GenreId) -> Result<bool, GenreError>;

    /// Whether a genre other than `excluding` carries this name.
    async fn exists_by_name(
        &self,
        name: &GenreName,
        excluding: Option<GenreId>,
    ) -> Result<bool, GenreError>;

    /// Subset of `ids` present in storage.
    async fn existing_ids(&self, ids: &[GenreId]) -> Result<Vec<GenreId>, GenreError>;

    /// Persist a new genre.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Unique constraint on name violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateGenreCommand) -> Result<Genre, GenreError>;

    /// # Errors
    /// * `NotFound` - No row updated
    /// * `NameAlreadyExists` - Unique constraint on name violated
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, command: UpdateGenreCommand) -> Result<Genre, GenreError>;

    /// # Errors
    /// * `NotFound` - No row deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: GenreId) -> Result<(), GenreError>;
}
