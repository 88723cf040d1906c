use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            password: row.password,
            role: Role::from_stored(row.role),
        }
    }
}

fn database_error(operation: &'static str, error: sqlx::Error) -> UserError {
    tracing::error!(operation, error = %error, "User query failed");
    UserError::DatabaseError(error.to_string())
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (first_name, last_name, email, password, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, password, role
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return UserError::EmailAlreadyExists(user.email.to_string());
                }
            }
            database_error("create", e)
        })?;

        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, password, role
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("find_by_email", e))?;

        Ok(row.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("exists_by_email", e))
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<(), UserError> {
        sqlx::query("UPDATE users SET password = $2 WHERE id = $1")
            .bind(id.0)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("update_password", e))?;

        Ok(())
    }
}
