use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::models::CreateMovieCommand;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::MovieName;
use crate::domain::movie::models::UpdateMovieCommand;
use crate::genre::models::GenreId;
use crate::genre::ports::GenreRepository;
use crate::movie::errors::MovieError;
use crate::movie::ports::MovieRepository;
use crate::movie::ports::MovieServicePort;

/// Movie catalogue operations.
///
/// Existence and name uniqueness are checked before every write; genre
/// references are checked against the genre store.
pub struct MovieService<MR, GR>
where
    MR: MovieRepository,
    GR: GenreRepository,
{
    movie_repository: Arc<MR>,
    genre_repository: Arc<GR>,
}

impl<MR, GR> MovieService<MR, GR>
where
    MR: MovieRepository,
    GR: GenreRepository,
{
    /// Create a new movie service with injected dependencies.
    ///
    /// # Arguments
    /// * `movie_repository` - Movie persistence implementation
    /// * `genre_repository` - Genre store used to validate genre references
    pub fn new(movie_repository: Arc<MR>, genre_repository: Arc<GR>) -> Self {
        Self {
            movie_repository,
            genre_repository,
        }
    }

    async fn ensure_genres_exist(&self, genres: &[GenreId]) -> Result<(), MovieError> {
        if genres.is_empty() {
            return Ok(());
        }

        let existing = self.genre_repository.existing_ids(genres).await?;
        let missing: Vec<GenreId> = genres
            .iter()
            .filter(|id| !existing.contains(id))
            .copied()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MovieError::UnknownGenres(missing))
        }
    }
}

#[async_trait]
impl<MR, GR> MovieServicePort for MovieService<MR, GR>
where
    MR: MovieRepository,
    GR: GenreRepository,
{
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        self.movie_repository.list_all().await
    }

    async fn get_movie(&self, id: MovieId) -> Result<Movie, MovieError> {
        self.movie_repository
            .find_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    async fn get_movie_by_name(&self, name: &MovieName) -> Result<Movie, MovieError> {
        self.movie_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| MovieError::NotFoundByName(name.to_string()))
    }

    async fn create_movie(&self, command: CreateMovieCommand) -> Result<Movie, MovieError> {
        if let Some(id) = command.id {
            if self.movie_repository.exists(id).await? {
                return Err(MovieError::AlreadyExists(id));
            }
        }

        if self
            .movie_repository
            .exists_by_name(&command.details.name, None)
            .await?
        {
            return Err(MovieError::NameAlreadyExists(
                command.details.name.to_string(),
            ));
        }

        self.ensure_genres_exist(&command.details.genres).await?;

        let movie = self.movie_repository.create(command).await?;
        tracing::info!(movie_id = %movie.id, name = %movie.details.name, "Movie created");

        Ok(movie)
    }

    async fn update_movie(&self, command: UpdateMovieCommand) -> Result<Movie, MovieError> {
        if !self.movie_repository.exists(command.id).await? {
            return Err(MovieError::NotFound(command.id));
        }

        if self
            .movie_repository
            .exists_by_name(&command.details.name, Some(command.id))
            .await?
        {
            return Err(MovieError::NameAlreadyExists(
                command.details.name.to_string(),
            ));
        }

        self.ensure_genres_exist(&command.details.genres).await?;

        let movie = self.movie_repository.update(command).await?;
        tracing::info!(movie_id = %movie.id, "Movie updated");

        Ok(movie)
    }

    async fn delete_movie(&self, id: MovieId) -> Result<(), MovieError> {
        if !self.movie_repository.exists(id).await? {
            return Err(MovieError::NotFound(id));
        }

        self.movie_repository.delete(id).await?;
        tracing::info!(movie_id = %id, "Movie deleted");

        Ok(())
    }
}
