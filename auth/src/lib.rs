//! Authentication utilities library
//!
//! Provides the authentication infrastructure used by the movie service:
//! - Password hashing (bcrypt, `$2a$` format)
//! - JWT token generation and validation (HS256, 24 hour lifetime)
//! - Authentication coordination, including legacy plaintext passwords
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(4).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let claims = Claims::for_user("ana@test.com", "Ana", "Lopez", "USER");
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "ana@test.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims, PasswordHasher};
//!
//! let hasher = PasswordHasher::with_cost(4).unwrap();
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", hasher).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_user("ana@test.com", "Ana", "Lopez", "USER");
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.exp - decoded.iat, 24 * 60 * 60);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::CredentialMatch;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TOKEN_LIFETIME_HOURS;
pub use password::PasswordError;
pub use password::PasswordHasher;
