use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::DateTime;
use chrono::Utc;
use regex::Regex;

use crate::user::errors::CredentialsError;
use crate::user::errors::EmailError;
use crate::user::errors::RegistrationError;

/// Shape every login email must fully match before the store is queried.
static LOGIN_EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.+@.+\..+$").expect("Invalid regex pattern - this is a bug in the codebase")
});

/// User aggregate entity.
///
/// `password` holds a bcrypt hash, or a plaintext value for rows created
/// before hashing was introduced.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// User unique identifier, generated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Access role carried in issued tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role(String);

impl Role {
    pub const USER: &'static str = "USER";

    /// Role assigned to every newly registered user.
    pub fn user() -> Self {
        Self(Self::USER.to_string())
    }

    /// Wrap a role read back from storage.
    pub fn from_stored(role: String) -> Self {
        Self(role)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::user()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser, the login shape
/// `local@domain.tld` and the column width of the user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 50;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322 or lacks a dotted domain
    /// * `TooLong` - Email longer than 50 characters
    pub fn new(email: String) -> Result<Self, EmailError> {
        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))?;

        // Registered addresses must also be accepted at login
        if !LOGIN_EMAIL_PATTERN.is_match(&email) {
            return Err(EmailError::InvalidFormat(
                "domain must contain a dot".to_string(),
            ));
        }

        Ok(EmailAddress(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with validated fields.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterUserCommand {
    const MAX_NAME_LENGTH: usize = 50;

    /// Construct a register command from raw request fields.
    ///
    /// # Errors
    /// * `MissingField` - A field is absent or blank
    /// * `TooLong` - A name exceeds 50 characters
    /// * `Email` - Email is not a valid address
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, RegistrationError> {
        let first_name = Self::required("name", first_name)?;
        let last_name = Self::required("last_name", last_name)?;
        let email = Self::required("email", email)?;
        let password = Self::required("password", password)?;

        Self::with_valid_length("name", &first_name)?;
        Self::with_valid_length("last_name", &last_name)?;

        Ok(Self {
            first_name,
            last_name,
            email: EmailAddress::new(email)?,
            password,
        })
    }

    fn required(field: &'static str, value: Option<String>) -> Result<String, RegistrationError> {
        match value {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(RegistrationError::MissingField(field)),
        }
    }

    fn with_valid_length(field: &'static str, value: &str) -> Result<(), RegistrationError> {
        let actual = value.chars().count();
        if actual > Self::MAX_NAME_LENGTH {
            return Err(RegistrationError::TooLong {
                field,
                max: Self::MAX_NAME_LENGTH,
                actual,
            });
        }
        Ok(())
    }
}

/// User row to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
}

/// Email and plaintext password presented at login.
///
/// Only exists for the duration of a login request.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validate raw login input.
    ///
    /// # Errors
    /// * `Missing` - Email or password absent or blank
    /// * `InvalidEmailFormat` - Email is not shaped like `local@domain.tld`
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, CredentialsError> {
        let (email, password) = match (email, password) {
            (Some(email), Some(password))
                if !email.trim().is_empty() && !password.trim().is_empty() =>
            {
                (email, password)
            }
            _ => return Err(CredentialsError::Missing),
        };

        if !LOGIN_EMAIL_PATTERN.is_match(&email) {
            return Err(CredentialsError::InvalidEmailFormat);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signed access token issued at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
