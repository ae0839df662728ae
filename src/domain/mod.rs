//! Domain layer - entities, value objects, and invariants.
//!
//! No dependencies on outer layers.

pub mod activity;
pub mod auth;
pub mod customer;
pub mod foundation;
pub mod opportunity;
pub mod user;
