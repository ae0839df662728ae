//! Argon2id implementation of the PasswordHasher port.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier,
        SaltString},
    Argon2,
};

use crate::domain::foundation::DomainError;
use crate::ports::PasswordHasher;

/// Argon2id password hasher with the library's default parameters.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("failed to hash password: {}", e)))
    }

    fn verify(&self, plain: &str, hashed: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hashed) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrips() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("s3cret").unwrap();
        assert!(hasher.verify("s3cret", &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn malformed_stored_hash_is_a_mismatch() {
        let hasher = Argon2PasswordHasher::new();
        assert!(!hasher.verify("anything", "not-a-phc-string"));
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = Argon2PasswordHasher::new();
        let a = hasher.hash("same").unwrap();
        let b = hasher.hash("same").unwrap();
        assert_ne!(a, b);
    }
}
