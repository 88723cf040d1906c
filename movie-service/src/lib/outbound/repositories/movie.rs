use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::Transaction;

use crate::domain::genre::models::GenreId;
use crate::domain::movie::models::CreateMovieCommand;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::MovieName;
use crate::domain::movie::models::MovieRating;
use crate::domain::movie::models::UpdateMovieCommand;
use crate::domain::movie::ports::MovieRepository;
use crate::movie::errors::MovieError;

const SELECT_MOVIES: &str = r#"
    SELECT m.id, m.name, m.duration, m.director, m.synopsis, m.language,
           m.classification, m.release_date, m.image, m.actors, m.score, m.votes,
           ARRAY(
               SELECT mg.genre_id FROM movie_genres mg
               WHERE mg.movie_id = m.id
               ORDER BY mg.genre_id
           ) AS genres
    FROM movies m
"#;

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: i64,
    name: String,
    duration: i32,
    director: Option<String>,
    synopsis: Option<String>,
    language: Option<String>,
    classification: Option<String>,
    release_date: Option<NaiveDate>,
    image: Option<String>,
    actors: Vec<String>,
    score: f32,
    votes: i32,
    genres: Vec<i64>,
}

impl TryFrom<MovieRow> for Movie {
    type Error = MovieError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        Ok(Movie {
            id: MovieId(row.id),
            details: MovieDetails {
                name: MovieName::new(row.name)?,
                duration: row.duration,
                director: row.director,
                synopsis: row.synopsis,
                language: row.language,
                classification: row.classification,
                release_date: row.release_date,
                image: row.image,
                genres: row.genres.into_iter().map(GenreId).collect(),
                actors: row.actors,
            },
            rating: MovieRating {
                score: row.score,
                votes: row.votes,
            },
        })
    }
}

fn database_error(operation: &'static str, error: sqlx::Error) -> MovieError {
    tracing::error!(operation, error = %error, "Movie query failed");
    MovieError::DatabaseError(error.to_string())
}

fn write_error(
    operation: &'static str,
    details: &MovieDetails,
    id: Option<MovieId>,
    error: sqlx::Error,
) -> MovieError {
    if let Some(db_err) = error.as_database_error() {
        if db_err.is_unique_violation() {
            match (db_err.constraint(), id) {
                (Some("movies_name_key"), _) => {
                    return MovieError::NameAlreadyExists(details.name.to_string())
                }
                (Some("movies_pkey"), Some(id)) => return MovieError::AlreadyExists(id),
                _ => {}
            }
        }
        if db_err.is_foreign_key_violation() {
            return MovieError::UnknownGenres(details.genres.clone());
        }
    }
    database_error(operation, error)
}

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn replace_genres(
        tx: &mut Transaction<'_, Postgres>,
        id: MovieId,
        details: &MovieDetails,
    ) -> Result<(), MovieError> {
        sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
            .bind(id.0)
            .execute(&mut **tx)
            .await
            .map_err(|e| database_error("replace_genres", e))?;

        if details.genres.is_empty() {
            return Ok(());
        }

        let genre_ids: Vec<i64> = details.genres.iter().map(|id| id.0).collect();
        sqlx::query(
            "INSERT INTO movie_genres (movie_id, genre_id) SELECT $1, UNNEST($2::BIGINT[])",
        )
        .bind(id.0)
        .bind(&genre_ids)
        .execute(&mut **tx)
        .await
        .map_err(|e| write_error("replace_genres", details, Some(id), e))?;

        Ok(())
    }

    async fn fetch_in(
        tx: &mut Transaction<'_, Postgres>,
        id: MovieId,
    ) -> Result<Movie, MovieError> {
        sqlx::query_as::<_, MovieRow>(&format!("{SELECT_MOVIES} WHERE m.id = $1"))
            .bind(id.0)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| database_error("fetch", e))?
            .ok_or(MovieError::NotFound(id))?
            .try_into()
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let rows = sqlx::query_as::<_, MovieRow>(&format!("{SELECT_MOVIES} ORDER BY m.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("list_all", e))?;

        rows.into_iter().map(Movie::try_from).collect()
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, MovieError> {
        sqlx::query_as::<_, MovieRow>(&format!("{SELECT_MOVIES} WHERE m.id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find_by_id", e))?
            .map(Movie::try_from)
            .transpose()
    }

    async fn find_by_name(&self, name: &MovieName) -> Result<Option<Movie>, MovieError> {
        sqlx::query_as::<_, MovieRow>(&format!("{SELECT_MOVIES} WHERE m.name = $1"))
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find_by_name", e))?
            .map(Movie::try_from)
            .transpose()
    }

    async fn exists(&self, id: MovieId) -> Result<bool, MovieError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("exists", e))
    }

    async fn exists_by_name(
        &self,
        name: &MovieName,
        excluding: Option<MovieId>,
    ) -> Result<bool, MovieError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM movies
                WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(name.as_str())
        .bind(excluding.map(|id| id.0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("exists_by_name", e))
    }

    async fn create(&self, command: CreateMovieCommand) -> Result<Movie, MovieError> {
        let details = &command.details;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("create", e))?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO movies (id, name, duration, director, synopsis, language,
                                classification, release_date, image, actors)
            VALUES (COALESCE($1, nextval(pg_get_serial_sequence('movies', 'id'))),
                    $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(command.id.map(|id| id.0))
        .bind(details.name.as_str())
        .bind(details.duration)
        .bind(&details.director)
        .bind(&details.synopsis)
        .bind(&details.language)
        .bind(&details.classification)
        .bind(details.release_date)
        .bind(&details.image)
        .bind(&details.actors)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error("create", details, command.id, e))?;

        let id = MovieId(id);

        if command.id.is_some() {
            // Keep generated ids ahead of explicitly supplied ones
            sqlx::query(
                "SELECT setval(pg_get_serial_sequence('movies', 'id'), (SELECT MAX(id) FROM movies))",
            )
            .execute(&mut *tx)
            .await
            .map_err(|e| database_error("create", e))?;
        }

        Self::replace_genres(&mut tx, id, details).await?;
        let movie = Self::fetch_in(&mut tx, id).await?;

        tx.commit().await.map_err(|e| database_error("create", e))?;

        Ok(movie)
    }

    async fn update(&self, command: UpdateMovieCommand) -> Result<Movie, MovieError> {
        let details = &command.details;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("update", e))?;

        let updated = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE movies
            SET name = $2, duration = $3, director = $4, synopsis = $5, language = $6,
                classification = $7, release_date = $8, image = $9, actors = $10
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(command.id.0)
        .bind(details.name.as_str())
        .bind(details.duration)
        .bind(&details.director)
        .bind(&details.synopsis)
        .bind(&details.language)
        .bind(&details.classification)
        .bind(details.release_date)
        .bind(&details.image)
        .bind(&details.actors)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| write_error("update", details, None, e))?;

        if updated.is_none() {
            return Err(MovieError::NotFound(command.id));
        }

        Self::replace_genres(&mut tx, command.id, details).await?;
        let movie = Self::fetch_in(&mut tx, command.id).await?;

        tx.commit().await.map_err(|e| database_error("update", e))?;

        Ok(movie)
    }

    async fn delete(&self, id: MovieId) -> Result<(), MovieError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(MovieError::NotFound(id));
        }

        Ok(())
    }
}
