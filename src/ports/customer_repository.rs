//! Customer repository port (write side).

use crate::domain::customer::Customer;
use crate::domain::foundation::{CustomerId, DomainError, ShopId};
use async_trait::async_trait;

/// Repository port for the customer aggregate.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Whether a customer with this email already exists in the shop.
    ///
    /// Uniqueness is scoped per shop; the same email may appear under
    /// different shops.
    async fn exists_by_email(&self, shop_id: ShopId, email: &str) -> Result<bool, DomainError>;

    /// Persists a new customer and returns it with its assigned id.
    async fn create(&self, customer: &Customer) -> Result<Customer, DomainError>;

    /// Loads a customer by id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Writes back the mutable fields of an existing customer.
    async fn update(&self, customer: &Customer) -> Result<(), DomainError>;
}
