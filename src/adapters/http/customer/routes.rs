//! HTTP routes for customer endpoints.

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{
    create_customer, get_customer_detail, list_customers, update_customer, CustomerHandlers,
};

/// Creates the customer router. Every route requires a valid bearer token.
pub fn customer_routes(handlers: CustomerHandlers, auth: AuthState) -> Router {
    Router::new()
        .route("/", post(create_customer))
        .route("/", get(list_customers))
        .route("/:id", get(get_customer_detail))
        .route("/:id", patch(update_customer))
        .with_state(handlers)
        .layer(middleware::from_fn_with_state(auth, auth_middleware))
}
