//! Password hashing port.

use crate::domain::foundation::DomainError;

/// Abstract credential hashing capability.
///
/// Synchronous by design: hashing is pure CPU work and implementations hold
/// no I/O resources.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password for storage.
    fn hash(&self, plain: &str) -> Result<String, DomainError>;

    /// Verifies a plaintext password against a stored hash.
    ///
    /// A malformed stored hash counts as a mismatch, not an error, so the
    /// caller cannot distinguish it from a wrong password.
    fn verify(&self, plain: &str, hashed: &str) -> bool;
}
