use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;

use crate::domain::user::models::AuthToken;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Registration and login policy.
///
/// Unknown emails and wrong passwords both surface as `InvalidCredentials`
/// so callers cannot tell which one happened.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token issuer
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn upgrade_legacy_password(&self, user: &User, password: &str) {
        let password_hash = match self.authenticator.hash_password(password) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "Failed to hash legacy password");
                return;
            }
        };

        match self
            .repository
            .update_password(user.id, &password_hash)
            .await
        {
            Ok(()) => tracing::info!(user_id = %user.id, "Upgraded legacy plaintext password"),
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "Failed to store upgraded password")
            }
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .exists_by_email(command.email.as_str())
            .await?
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Password(e.to_string()))?;

        let user = NewUser {
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            role: Role::user(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, UserError> {
        let Some(user) = self.repository.find_by_email(credentials.email()).await? else {
            tracing::debug!("Login rejected: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        let claims = Claims::for_user(
            &user.email,
            &user.first_name,
            &user.last_name,
            user.role.as_str(),
        );

        let result = self
            .authenticator
            .authenticate(credentials.password(), &user.password, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
                    UserError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(user_id = %user.id, error = %err, "Stored password hash is unreadable");
                    UserError::Password(err.to_string())
                }
                AuthenticationError::JwtError(err) => UserError::Token(err.to_string()),
            })?;

        if result.needs_rehash() {
            self.upgrade_legacy_password(&user, credentials.password())
                .await;
        }

        let issued_at = claims
            .issued_at_time()
            .ok_or_else(|| UserError::Token("issued-at out of range".to_string()))?;
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| UserError::Token("expiry out of range".to_string()))?;

        Ok(AuthToken {
            token: result.access_token,
            subject: claims.sub,
            issued_at,
            expires_at,
        })
    }
}
