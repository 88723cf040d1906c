use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of every issued access token.
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Access token claims.
///
/// The subject is the user's email. Profile fields keep the claim names
/// existing clients already read (`nombre`, `apellido`, `rol`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,

    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    pub last_name: String,

    #[serde(rename = "rol")]
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user issued now.
    ///
    /// # Returns
    /// Claims expiring exactly `TOKEN_LIFETIME_HOURS` after issue
    pub fn for_user(
        email: impl ToString,
        first_name: impl ToString,
        last_name: impl ToString,
        role: impl ToString,
    ) -> Self {
        Self::issued_at(Utc::now(), email, first_name, last_name, role)
    }

    /// Create claims for a user with an explicit issue instant.
    pub fn issued_at(
        now: DateTime<Utc>,
        email: impl ToString,
        first_name: impl ToString,
        last_name: impl ToString,
        role: impl ToString,
    ) -> Self {
        let expiration = now + Duration::hours(TOKEN_LIFETIME_HOURS);

        Self {
            sub: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }

    pub fn issued_at_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("ana@test.com", "Ana", "Lopez", "USER");

        assert_eq!(claims.sub, "ana@test.com");
        assert_eq!(claims.first_name, "Ana");
        assert_eq!(claims.last_name, "Lopez");
        assert_eq!(claims.role, "USER");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60); // 24 hours
    }

    #[test]
    fn test_serialized_claim_names() {
        let claims = Claims::for_user("ana@test.com", "Ana", "Lopez", "USER");
        let value = serde_json::to_value(&claims).unwrap();

        assert_eq!(value["sub"], "ana@test.com");
        assert_eq!(value["nombre"], "Ana");
        assert_eq!(value["apellido"], "Lopez");
        assert_eq!(value["rol"], "USER");
        assert!(value.get("first_name").is_none());
    }

    #[test]
    fn test_issued_at_timestamps() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let claims = Claims::issued_at(now, "a@b.co", "A", "B", "USER");

        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_086_400);
        assert_eq!(claims.issued_at_time(), Some(now));
        assert_eq!(
            claims.expires_at(),
            Some(now + Duration::hours(TOKEN_LIFETIME_HOURS))
        );
    }

    #[test]
    fn test_is_expired() {
        let now = DateTime::from_timestamp(1000, 0).unwrap();
        let claims = Claims::issued_at(now, "a@b.co", "A", "B", "USER");

        assert!(!claims.is_expired(claims.exp - 1)); // Not expired
        assert!(!claims.is_expired(claims.exp)); // Exactly at expiration
        assert!(claims.is_expired(claims.exp + 1)); // Expired
    }
}
