//! HTTP handlers for auth endpoints.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::{AuthState, RequireAuth};
use crate::application::auth::AuthError;

use super::dto::{CurrentUserResponse, LoginRequest, TokenResponse};

/// POST /api/auth/login - exchange credentials for an access token.
pub async fn login(State(auth): State<AuthState>, Json(req): Json<LoginRequest>) -> Response {
    let user = match auth.authenticate(&req.email, &req.password).await {
        Ok(user) => user,
        Err(e) => return handle_auth_error(e),
    };

    match auth.create_access_token(&user) {
        Ok(token) => (StatusCode::OK, Json(TokenResponse::from(token))).into_response(),
        Err(e) => handle_auth_error(e),
    }
}

/// GET /api/auth/me - profile of the logged-in user.
pub async fn me(State(auth): State<AuthState>, RequireAuth(user): RequireAuth) -> Response {
    let view = auth.current_user_view(&user);
    (StatusCode::OK, Json(CurrentUserResponse::from(view))).into_response()
}

fn handle_auth_error(e: AuthError) -> Response {
    match e {
        AuthError::Authentication | AuthError::Token(_) => (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ErrorResponse::unauthorized("Incorrect email or password")),
        )
            .into_response(),
        AuthError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "auth use case failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
    }
}
