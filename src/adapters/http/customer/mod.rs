//! HTTP endpoints for customer management.

mod dto;
mod handlers;
mod routes;

pub use handlers::CustomerHandlers;
pub use routes::customer_routes;
