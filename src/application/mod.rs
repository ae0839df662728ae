//! Application layer - use-case handlers.
//!
//! Handlers orchestrate domain objects through ports. They own the
//! application-level error taxonomy that HTTP adapters map to responses.

pub mod auth;
pub mod customer;
