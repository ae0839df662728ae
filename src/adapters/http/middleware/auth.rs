//! Bearer-token authentication middleware and extractors.
//!
//! ```text
//! Request → auth_middleware → injects CurrentUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The middleware resolves tokens through `AuthService`, so handlers never
//! see tokens, only the resolved `User`. A request without a token passes
//! through untouched; `RequireAuth` then rejects it with 401 on protected
//! routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::auth::{AuthError, AuthService};
use crate::domain::user::User;

/// Auth middleware state.
pub type AuthState = Arc<AuthService>;

/// Authenticated user carried in request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Validates the Bearer token, if any, and stashes the resolved user.
///
/// Any token failure answers 401 with a `WWW-Authenticate: Bearer` challenge,
/// matching what token-carrying clients expect.
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match auth.user_from_token(token).await {
            Ok(user) => {
                request.extensions_mut().insert(CurrentUser(user));
                next.run(request).await
            }
            Err(AuthError::Infrastructure(msg)) => {
                tracing::error!(error = %msg, "token resolution failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal()))
                    .into_response()
            }
            Err(e) => unauthorized_response(&e.to_string()),
        },
        None => next.run(request).await,
    }
}

fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(ErrorResponse::unauthorized(message)),
    )
        .into_response()
}

/// Extractor that requires an authenticated user.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub User);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<CurrentUser>()
                .cloned()
                .map(|CurrentUser(user)| RequireAuth(user))
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection for requests without a validated user.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => unauthorized_response("Authentication required"),
        }
    }
}
