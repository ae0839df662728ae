//! Authentication value objects.

use serde::{Deserialize, Serialize};

/// A freshly issued access token. Ephemeral: produced per login, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
}

impl AuthToken {
    /// Wraps an opaque token string with the fixed bearer label.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
