//! Customer use-case error taxonomy.

use crate::domain::customer::CustomerValidationError;
use crate::domain::foundation::{CustomerId, DomainError, ShopId};
use thiserror::Error;

/// Errors from customer use cases.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("operation not permitted")]
    Forbidden,

    #[error("customer {0} not found")]
    NotFound(CustomerId),

    #[error("shop {0} not found")]
    ShopNotFound(ShopId),

    #[error("customer email '{0}' already exists in this shop")]
    DuplicateEmail(String),

    #[error(transparent)]
    InvalidInput(#[from] CustomerValidationError),

    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for CustomerError {
    fn from(err: DomainError) -> Self {
        CustomerError::Infrastructure(err.message)
    }
}
