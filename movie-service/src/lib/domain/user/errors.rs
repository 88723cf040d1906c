use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for login input validation.
///
/// Raised before the credential store is touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("email and password required")]
    Missing,

    #[error("invalid email format")]
    InvalidEmailFormat,
}

/// Error for registration input validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error(transparent)]
    InvalidCredentialsInput(#[from] CredentialsError),

    #[error(transparent)]
    InvalidRegistration(#[from] RegistrationError),

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(String),

    #[error("Token error: {0}")]
    Token(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
