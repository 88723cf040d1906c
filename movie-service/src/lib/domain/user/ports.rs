use async_trait::async_trait;

use crate::domain::user::models::AuthToken;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with role `USER`.
    ///
    /// # Arguments
    /// * `command` - Validated names, email and plaintext password
    ///
    /// # Returns
    /// Persisted user carrying its generated id
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `credentials` - Validated email and plaintext password
    ///
    /// # Returns
    /// Signed token valid for 24 hours
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Password` / `Token` - Hash verification or signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, UserError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique constraint on email violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by exact email.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Whether a user with this exact email exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_email(&self, email: &str) -> Result<bool, UserError>;

    /// Replace the stored password value.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<(), UserError>;
}
