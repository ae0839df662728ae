//! User domain errors.

use thiserror::Error;

/// Errors raised by user domain behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// An operation was attempted by or on an inactive user.
    #[error("User is inactive")]
    Inactive,
}
