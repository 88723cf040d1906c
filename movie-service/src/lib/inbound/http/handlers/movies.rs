use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::genre::models::GenreId;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::MovieName;
use crate::movie::errors::MovieError;

pub mod create_movie;
pub mod delete_movie;
pub mod get_movie;
pub mod get_movie_by_name;
pub mod list_movies;
pub mod update_movie;

pub const MOVIES_PATH: &str = "/api/v1/movies";

/// HTTP request body shared by create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieRequestBody {
    id: Option<i64>,
    name: String,
    #[serde(default)]
    duration: i32,
    director: Option<String>,
    synopsis: Option<String>,
    language: Option<String>,
    classification: Option<String>,
    release_date: Option<NaiveDate>,
    image: Option<String>,
    #[serde(default)]
    genres: Vec<i64>,
    #[serde(default)]
    actors: Vec<String>,
}

impl MovieRequestBody {
    fn id(&self) -> Option<MovieId> {
        self.id.map(MovieId)
    }

    fn try_into_details(self) -> Result<MovieDetails, MovieError> {
        MovieDetails::new(
            MovieName::new(self.name)?,
            self.duration,
            self.director,
            self.synopsis,
            self.language,
            self.classification,
            self.release_date,
            self.image,
            self.genres.into_iter().map(GenreId).collect(),
            self.actors,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieData {
    pub id: i64,
    pub name: String,
    pub duration: i32,
    pub director: Option<String>,
    pub synopsis: Option<String>,
    pub language: Option<String>,
    pub classification: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub score: f32,
    pub votes: i32,
    pub genres: Vec<i64>,
    pub actors: Vec<String>,
}

impl From<&Movie> for MovieData {
    fn from(movie: &Movie) -> Self {
        let details = &movie.details;
        Self {
            id: movie.id.0,
            name: details.name.to_string(),
            duration: details.duration,
            director: details.director.clone(),
            synopsis: details.synopsis.clone(),
            language: details.language.clone(),
            classification: details.classification.clone(),
            release_date: details.release_date,
            image: details.image.clone(),
            score: movie.rating.score,
            votes: movie.rating.votes,
            genres: details.genres.iter().map(|id| id.0).collect(),
            actors: details.actors.clone(),
        }
    }
}
