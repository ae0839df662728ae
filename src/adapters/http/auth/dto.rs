//! Request/response types for auth endpoints.

use serde::{Deserialize, Serialize};

use crate::application::auth::CurrentUserView;
use crate::domain::auth::AuthToken;
use crate::domain::foundation::UserId;

/// POST /api/auth/login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<AuthToken> for TokenResponse {
    fn from(token: AuthToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
        }
    }
}

/// GET /api/auth/me response.
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub is_superuser: bool,
}

impl From<CurrentUserView> for CurrentUserResponse {
    fn from(view: CurrentUserView) -> Self {
        Self {
            id: view.id,
            email: view.email,
            full_name: view.full_name,
            roles: view.roles,
            is_superuser: view.is_superuser,
        }
    }
}
