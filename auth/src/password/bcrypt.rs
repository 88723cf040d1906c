use bcrypt::Version;

use super::errors::PasswordError;

/// Prefixes of the modular crypt formats produced by the bcrypt family.
const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Password hashing implementation.
///
/// Produces bcrypt hashes in the `$2a$` format so stored values stay
/// readable by clients of the existing user table.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    /// Create a new password hasher using the default bcrypt cost.
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// # Errors
    /// * `InvalidCost` - Cost outside the range bcrypt accepts
    pub fn with_cost(cost: u32) -> Result<Self, PasswordError> {
        if !(Self::MIN_COST..=Self::MAX_COST).contains(&cost) {
            return Err(PasswordError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a random salt.
    ///
    /// # Returns
    /// Modular crypt string starting with `$2a$`
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash_with_result(password, self.cost)
            .map(|parts| parts.format_for_version(Version::TwoA))
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored bcrypt hash.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored value is not a parseable bcrypt hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })
    }

    /// Whether a stored password value is a bcrypt hash rather than a
    /// legacy plaintext password.
    pub fn is_hash(stored: &str) -> bool {
        BCRYPT_PREFIXES
            .iter()
            .any(|prefix| stored.starts_with(prefix))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare a candidate password with a legacy plaintext value.
///
/// Runs in time independent of where the inputs first differ.
pub fn plaintext_matches(candidate: &str, stored: &str) -> bool {
    let candidate = candidate.as_bytes();
    let stored = stored.as_bytes();
    if candidate.len() != stored.len() {
        return false;
    }
    candidate
        .iter()
        .zip(stored)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
