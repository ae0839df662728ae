//! Shop repository port.

use crate::domain::foundation::{DomainError, ShopId};
use async_trait::async_trait;

/// Existence checks for shops.
///
/// Customers reference a shop by id; the write side only needs to know the
/// shop is real before accepting the reference.
#[async_trait]
pub trait ShopRepository: Send + Sync {
    async fn exists(&self, id: ShopId) -> Result<bool, DomainError>;
}
