use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::MovieRating;
use crate::domain::user::models::UserId;
use crate::domain::vote::models::NewVote;
use crate::domain::vote::models::Vote;
use crate::domain::vote::models::VoteId;
use crate::domain::vote::models::VoteValue;
use crate::domain::vote::ports::VoteRepository;
use crate::vote::errors::VoteError;

#[derive(sqlx::FromRow)]
struct VoteRow {
    id: i64,
    user_id: i64,
    movie_id: i64,
    value: i32,
}

impl TryFrom<VoteRow> for Vote {
    type Error = VoteError;

    fn try_from(row: VoteRow) -> Result<Self, Self::Error> {
        Ok(Vote {
            id: VoteId(row.id),
            user_id: UserId(row.user_id),
            movie_id: MovieId(row.movie_id),
            value: VoteValue::new(row.value)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct RatingRow {
    score: f32,
    votes: i32,
}

fn database_error(operation: &'static str, error: sqlx::Error) -> VoteError {
    tracing::error!(operation, error = %error, "Vote query failed");
    VoteError::DatabaseError(error.to_string())
}

pub struct PostgresVoteRepository {
    pool: PgPool,
}

impl PostgresVoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PostgresVoteRepository {
    async fn upsert(&self, vote: NewVote) -> Result<(Vote, MovieRating), VoteError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("upsert", e))?;

        // Row lock serialises concurrent votes on the same movie
        let locked = sqlx::query_scalar::<_, i64>("SELECT id FROM movies WHERE id = $1 FOR UPDATE")
            .bind(vote.movie_id.0)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| database_error("upsert", e))?;

        if locked.is_none() {
            return Err(VoteError::MovieNotFound(vote.movie_id));
        }

        let row = sqlx::query_as::<_, VoteRow>(
            r#"
            INSERT INTO votes (user_id, movie_id, value)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, movie_id) DO UPDATE SET value = EXCLUDED.value
            RETURNING id, user_id, movie_id, value
            "#,
        )
        .bind(vote.user_id.0)
        .bind(vote.movie_id.0)
        .bind(vote.value.get())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| database_error("upsert", e))?;

        let rating = sqlx::query_as::<_, RatingRow>(
            r#"
            UPDATE movies
            SET score = COALESCE((SELECT AVG(value)::REAL FROM votes WHERE movie_id = $1), 0),
                votes = (SELECT COUNT(*)::INTEGER FROM votes WHERE movie_id = $1)
            WHERE id = $1
            RETURNING score, votes
            "#,
        )
        .bind(vote.movie_id.0)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| database_error("upsert", e))?;

        tx.commit().await.map_err(|e| database_error("upsert", e))?;

        Ok((
            row.try_into()?,
            MovieRating {
                score: rating.score,
                votes: rating.votes,
            },
        ))
    }

    async fn list_by_movie(&self, movie_id: MovieId) -> Result<Vec<Vote>, VoteError> {
        let rows = sqlx::query_as::<_, VoteRow>(
            r#"
            SELECT id, user_id, movie_id, value
            FROM votes
            WHERE movie_id = $1
            ORDER BY id
            "#,
        )
        .bind(movie_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("list_by_movie", e))?;

        rows.into_iter().map(Vote::try_from).collect()
    }
}
