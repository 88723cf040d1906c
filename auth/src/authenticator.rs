use serde::Serialize;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::plaintext_matches;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Stored passwords carrying a bcrypt prefix are verified with bcrypt. Any
/// other stored value is a legacy plaintext password, which only matches when
/// legacy support is enabled.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    allow_legacy_plaintext: bool,
}

/// How a stored password was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMatch {
    Hashed,
    LegacyPlaintext,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,

    pub matched: CredentialMatch,
}

impl AuthenticationResult {
    /// Whether the stored password should be re-hashed.
    pub fn needs_rehash(&self) -> bool {
        self.matched == CredentialMatch::LegacyPlaintext
    }
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing (at least 32 bytes)
    /// * `password_hasher` - Hasher used for new and stored passwords
    ///
    /// # Errors
    /// * `SecretTooShort` - Signing secret is shorter than 32 bytes
    pub fn new(jwt_secret: &[u8], password_hasher: PasswordHasher) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret)?,
            allow_legacy_plaintext: true,
        })
    }

    /// Enable or disable matching of legacy plaintext passwords.
    pub fn with_legacy_plaintext(mut self, allow: bool) -> Self {
        self.allow_legacy_plaintext = allow;
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored value.
    ///
    /// # Returns
    /// How the password matched
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn verify_password(
        &self,
        password: &str,
        stored: &str,
    ) -> Result<CredentialMatch, AuthenticationError> {
        if PasswordHasher::is_hash(stored) {
            return match self.password_hasher.verify(password, stored)? {
                true => Ok(CredentialMatch::Hashed),
                false => Err(AuthenticationError::InvalidCredentials),
            };
        }

        if !self.allow_legacy_plaintext {
            tracing::debug!("Stored password is not hashed and legacy plaintext is disabled");
            return Err(AuthenticationError::InvalidCredentials);
        }

        if plaintext_matches(password, stored) {
            Ok(CredentialMatch::LegacyPlaintext)
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored` - Stored password value
    /// * `claims` - JWT claims to encode in token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored: &str,
        claims: &T,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let matched = self.verify_password(password, stored)?;

        let access_token = self.jwt_handler.encode(claims)?;

        Ok(AuthenticationResult {
            access_token,
            matched,
        })
    }

    /// Generate JWT token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token<T: for<'de> serde::Deserialize<'de>>(
        &self,
        token: &str,
    ) -> Result<T, JwtError> {
        self.jwt_handler.decode(token)
    }
}
