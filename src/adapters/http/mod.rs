//! HTTP interface layer built on axum.
//!
//! Each resource gets a dto/handlers/routes triple; the middleware module
//! owns token validation and the `RequireAuth` extractor.

pub mod auth;
pub mod customer;
pub mod error;
pub mod middleware;
