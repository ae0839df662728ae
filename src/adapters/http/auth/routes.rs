//! HTTP routes for auth endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{login, me};

/// Creates the auth router. `/login` is public; `/me` sits behind the token
/// middleware.
pub fn auth_routes(auth: AuthState) -> Router {
    Router::new()
        .route(
            "/me",
            get(me).layer(middleware::from_fn_with_state(
                auth.clone(),
                auth_middleware,
            )),
        )
        .route("/login", post(login))
        .with_state(auth)
}
