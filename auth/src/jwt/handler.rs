use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Uses HS256 (HMAC with SHA-256). Construction fails for secrets shorter
/// than `MIN_SECRET_LEN`, so a misconfigured process stops at startup instead
/// of on the first login.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Minimum secret length in bytes for HS256.
    pub const MIN_SECRET_LEN: usize = 32;

    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Errors
    /// * `SecretTooShort` - Secret is shorter than 32 bytes
    ///
    /// # Security Notes
    /// - Rotating the secret invalidates every token issued before
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.len() < Self::MIN_SECRET_LEN {
            return Err(JwtError::SecretTooShort {
                min: Self::MIN_SECRET_LEN,
                actual: secret.len(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// Requires `exp` and `sub`; expiry is checked without leeway.
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `MissingClaim` - A required claim is absent
    /// * `InvalidToken` - Token signature is invalid
    /// * `DecodingFailed` - Token is malformed
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.leeway = 0;

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
                ErrorKind::InvalidSignature => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}
