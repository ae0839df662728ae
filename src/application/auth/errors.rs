//! Authentication error taxonomy.

use crate::domain::foundation::DomainError;
use thiserror::Error;

/// Errors from authentication use cases.
///
/// `Authentication` is deliberately undifferentiated: unknown email, wrong
/// password, and inactive account all collapse into it so responses leak
/// nothing about which credential part failed.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    Authentication,

    #[error("token rejected: {0}")]
    Token(String),

    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for AuthError {
    fn from(err: DomainError) -> Self {
        AuthError::Infrastructure(err.message)
    }
}
