//! Customer domain module.
//!
//! The customer is the one aggregate this core mutates. All invariants
//! (non-blank name/email, email shape, status rules) live on the entity
//! itself so every use case goes through the same guards.

mod errors;
mod model;
mod status;

pub use errors::CustomerValidationError;
pub use model::Customer;
pub use status::CustomerStatus;
