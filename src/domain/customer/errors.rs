//! Customer domain errors.

use thiserror::Error;

/// Invariant violations raised by [`super::Customer`] construction and
/// mutation. The application layer remaps these into its input error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerValidationError {
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    #[error("invalid email format")]
    InvalidEmail,

    #[error("a customer cannot be created with LOST status")]
    LostOnCreate,
}
