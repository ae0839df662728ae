//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration (token signing)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for signing access tokens
    pub secret_key: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_token_expiry")]
    pub access_token_expire_minutes: i64,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// A short secret is tolerated in development but refused in production.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.secret_key.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__SECRET_KEY"));
        }
        if *environment == Environment::Production && self.secret_key.len() < 32 {
            return Err(ValidationError::SecretKeyTooShort);
        }
        if self.access_token_expire_minutes <= 0 {
            return Err(ValidationError::InvalidTokenExpiry);
        }
        Ok(())
    }
}

fn default_token_expiry() -> i64 {
    30
}
