//! Access-token port.

use crate::domain::foundation::DomainError;
use thiserror::Error;

/// Claims carried by an access token.
///
/// `sub` is the user id rendered as a decimal string, per the token format
/// the rest of the platform expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
}

/// Why a presented token was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenDecodeError {
    #[error("token expired")]
    Expired,
    #[error("token invalid")]
    Invalid,
}

/// Signs and decodes access tokens.
///
/// Synchronous: implementations are pure computation over an in-memory key.
pub trait TokenProvider: Send + Sync {
    /// Signs `claims` into a token valid for `expires_in_minutes`.
    fn encode(&self, claims: &TokenClaims, expires_in_minutes: i64) -> Result<String, DomainError>;

    /// Decodes and validates a token, including its expiry.
    fn decode(&self, token: &str) -> Result<TokenClaims, TokenDecodeError>;
}
