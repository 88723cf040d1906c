use serde::Deserialize;
use serde::Serialize;

use crate::domain::genre::models::Genre;
use crate::domain::genre::models::GenreId;
use crate::domain::genre::models::GenreName;
use crate::genre::errors::GenreError;

pub mod create_genre;
pub mod delete_genre;
pub mod get_genre;
pub mod get_genre_by_name;
pub mod list_genres;
pub mod update_genre;

pub const GENRES_PATH: &str = "/api/v1/genres";

/// HTTP request body shared by create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenreRequestBody {
    id: Option<i64>,
    name: String,
}

impl GenreRequestBody {
    fn id(&self) -> Option<GenreId> {
        self.id.map(GenreId)
    }

    fn try_into_name(self) -> Result<GenreName, GenreError> {
        Ok(GenreName::new(self.name)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreData {
    pub id: i64,
    pub name: String,
}

impl From<&Genre> for GenreData {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id.0,
            name: genre.name.to_string(),
        }
    }
}
