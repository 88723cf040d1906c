use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::genre::models::CreateGenreCommand;
use crate::domain::genre::models::Genre;
use crate::domain::genre::models::GenreId;
use crate::domain::genre::models::GenreName;
use crate::domain::genre::models::UpdateGenreCommand;
use crate::genre::errors::GenreError;
use crate::genre::ports::GenreRepository;
use crate::genre::ports::GenreServicePort;

/// Genre catalogue operations.
pub struct GenreService<GR>
where
    GR: GenreRepository,
{
    repository: Arc<GR>,
}

impl<GR> GenreService<GR>
where
    GR: GenreRepository,
{
    pub fn new(repository: Arc<GR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<GR> GenreServicePort for GenreService<GR>
where
    GR: GenreRepository,
{
    async fn list_genres(&self) -> Result<Vec<Genre>, GenreError> {
        self.repository.list_all().await
    }

    async fn get_genre(&self, id: GenreId) -> Result<Genre, GenreError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(GenreError::NotFound(id))
    }

    async fn get_genre_by_name(&self, name: &GenreName) -> Result<Genre, GenreError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| GenreError::NotFoundByName(name.to_string()))
    }

    async fn create_genre(&self, command: CreateGenreCommand) -> Result<Genre, GenreError> {
        if let Some(id) = command.id {
            if self.repository.exists(id).await? {
                return Err(GenreError::AlreadyExists(id));
            }
        }

        if self.repository.exists_by_name(&command.name, None).await? {
            return Err(GenreError::NameAlreadyExists(command.name.to_string()));
        }

        let genre = self.repository.create(command).await?;
        tracing::info!(genre_id = %genre.id, name = %genre.name, "Genre created");

        Ok(genre)
    }

    async fn update_genre(&self, command: UpdateGenreCommand) -> Result<Genre, GenreError> {
        if !self.repository.exists(command.id).await? {
            return Err(GenreError::NotFound(command.id));
        }

        if self
            .repository
            .exists_by_name(&command.name, Some(command.id))
            .await?
        {
            return Err(GenreError::NameAlreadyExists(command.name.to_string()));
        }

        let genre = self.repository.update(command).await?;
        tracing::info!(genre_id = %genre.id, "Genre updated");

        Ok(genre)
    }

    async fn delete_genre(&self, id: GenreId) -> Result<(), GenreError> {
        if !self.repository.exists(id).await? {
            return Err(GenreError::NotFound(id));
        }

        self.repository.delete(id).await?;
        tracing::info!(genre_id = %id, "Genre deleted");

        Ok(())
    }
}
