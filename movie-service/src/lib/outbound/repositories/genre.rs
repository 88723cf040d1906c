use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::genre::models::CreateGenreCommand;
use crate::domain::genre::models::Genre;
use crate::domain::genre::models::GenreId;
use crate::domain::genre::models::GenreName;
use crate::domain::genre::models::UpdateGenreCommand;
use crate::domain::genre::ports::GenreRepository;
use crate::genre::errors::GenreError;

#[derive(sqlx::FromRow)]
struct GenreRow {
    id: i64,
    name: String,
}

impl TryFrom<GenreRow> for Genre {
    type Error = GenreError;

    fn try_from(row: GenreRow) -> Result<Self, Self::Error> {
        Ok(Genre {
            id: GenreId(row.id),
            name: GenreName::new(row.name)?,
        })
    }
}

fn database_error(operation: &'static str, error: sqlx::Error) -> GenreError {
    tracing::error!(operation, error = %error, "Genre query failed");
    GenreError::DatabaseError(error.to_string())
}

fn write_error(
    operation: &'static str,
    name: &GenreName,
    id: Option<GenreId>,
    error: sqlx::Error,
) -> GenreError {
    if let Some(db_err) = error.as_database_error() {
        if db_err.is_unique_violation() {
            match (db_err.constraint(), id) {
                (Some("genres_name_key"), _) => {
                    return GenreError::NameAlreadyExists(name.to_string())
                }
                (Some("genres_pkey"), Some(id)) => return GenreError::AlreadyExists(id),
                _ => {}
            }
        }
    }
    database_error(operation, error)
}

pub struct PostgresGenreRepository {
    pool: PgPool,
}

impl PostgresGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PostgresGenreRepository {
    async fn list_all(&self) -> Result<Vec<Genre>, GenreError> {
        let rows = sqlx::query_as::<_, GenreRow>("SELECT id, name FROM genres ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("list_all", e))?;

        rows.into_iter().map(Genre::try_from).collect()
    }

    async fn find_by_id(&self, id: GenreId) -> Result<Option<Genre>, GenreError> {
        sqlx::query_as::<_, GenreRow>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find_by_id", e))?
            .map(Genre::try_from)
            .transpose()
    }

    async fn find_by_name(&self, name: &GenreName) -> Result<Option<Genre>, GenreError> {
        sqlx::query_as::<_, GenreRow>("SELECT id, name FROM genres WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find_by_name", e))?
            .map(Genre::try_from)
            .transpose()
    }

    async fn exists(&self, id: GenreId) -> Result<bool, GenreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM genres WHERE id = $1)")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("exists", e))
    }

    async fn exists_by_name(
        &self,
        name: &GenreName,
        excluding: Option<GenreId>,
    ) -> Result<bool, GenreError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM genres
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

    async fn existing_ids(&self, ids: &[GenreId]) -> Result<Vec<GenreId>, GenreError> {
        let ids: Vec<i64> = ids.iter().map(|id| id.0).collect();

        let rows = sqlx::query_scalar::<_, i64>("SELECT id FROM genres WHERE id = ANY($1)")
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("existing_ids", e))?;

        Ok(rows.into_iter().map(GenreId).collect())
    }

    async fn create(&self, command: CreateGenreCommand) -> Result<Genre, GenreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("create", e))?;

        let row = match command.id {
            Some(id) => {
                sqlx::query_as::<_, GenreRow>(
                    "INSERT INTO genres (id, name) VALUES ($1, $2) RETURNING id, name",
                )
                .bind(id.0)
                .bind(command.name.as_str())
                .fetch_one(&mut *tx)
                .await
            }
            None => {
                sqlx::query_as::<_, GenreRow>(
                    "INSERT INTO genres (name) VALUES ($1) RETURNING id, name",
                )
                .bind(command.name.as_str())
                .fetch_one(&mut *tx)
                .await
            }
        }
        .map_err(|e| write_error("create", &command.name, command.id, e))?;

        if command.id.is_some() {
            // Keep generated ids ahead of explicitly supplied ones
            sqlx::query(
                "SELECT setval(pg_get_serial_sequence('genres', 'id'), (SELECT MAX(id) FROM genres))",
            )
            .execute(&mut *tx)
            .await
            .map_err(|e| database_error("create", e))?;
        }

        tx.commit().await.map_err(|e| database_error("create", e))?;

        row.try_into()
    }

    async fn update(&self, command: UpdateGenreCommand) -> Result<Genre, GenreError> {
        let row = sqlx::query_as::<_, GenreRow>(
            "UPDATE genres SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(command.id.0)
        .bind(command.name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("update", &command.name, None, e))?;

        row.ok_or(GenreError::NotFound(command.id))?.try_into()
    }

    async fn delete(&self, id: GenreId) -> Result<(), GenreError> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(GenreError::NotFound(id));
        }

        Ok(())
    }
}
