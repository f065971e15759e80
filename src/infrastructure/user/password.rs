//! Password storage schemes

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::Deserialize;
use std::fmt::Debug;
use std::sync::Arc;

use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Turn a submitted password into the value that gets stored
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a submitted password against the stored value
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Which scheme is used to store passwords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    /// Store the password as given and compare byte-for-byte
    Plaintext,
    #[default]
    Argon2,
}

impl PasswordScheme {
    /// Build the hasher for this scheme
    pub fn hasher(&self) -> Arc<dyn PasswordHasher> {
        match self {
            Self::Plaintext => Arc::new(PlaintextHasher),
            Self::Argon2 => Arc::new(Argon2Hasher::new()),
        }
    }
}

/// Stores passwords verbatim
#[derive(Debug, Clone, Default)]
pub struct PlaintextHasher;

impl PasswordHasher for PlaintextHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        password.as_bytes() == stored.as_bytes()
    }
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new Argon2 hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let parsed_hash = match PasswordHash::new(stored) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_round_trip() {
        let hasher = PlaintextHasher;

        let stored = hasher.hash("p1").unwrap();
        assert_eq!(stored, "p1");

        assert!(hasher.verify("p1", &stored));
        assert!(!hasher.verify("P1", &stored));
        assert!(!hasher.verify("p1 ", &stored));
    }

    #[test]
    fn test_argon2_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).unwrap();

        assert_ne!(hash, password);
        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_argon2_hash_is_salted() {
        let hasher = Argon2Hasher::new();

        let hash1 = hasher.hash("same").unwrap();
        let hash2 = hasher.hash("same").unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_argon2_rejects_plaintext_stored_value() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("password", "password"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_scheme_deserialization() {
        let scheme: PasswordScheme = serde_json::from_str("\"plaintext\"").unwrap();
        assert_eq!(scheme, PasswordScheme::Plaintext);

        let scheme: PasswordScheme = serde_json::from_str("\"argon2\"").unwrap();
        assert_eq!(scheme, PasswordScheme::Argon2);

        assert_eq!(PasswordScheme::default(), PasswordScheme::Argon2);
    }

    #[test]
    fn test_scheme_builds_matching_hasher() {
        let plain = PasswordScheme::Plaintext.hasher();
        assert_eq!(plain.hash("p1").unwrap(), "p1");

        let argon = PasswordScheme::Argon2.hasher();
        assert!(argon.hash("p1").unwrap().starts_with("$argon2"));
    }
}
