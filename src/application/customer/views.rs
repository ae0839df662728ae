//! Views returned by customer write use cases.

use crate::application::customer::CustomerError;
use crate::domain::customer::{Customer, CustomerStatus};
use crate::domain::foundation::{CustomerId, ShopId, Timestamp, UserId};
use serde::Serialize;

/// Flat representation of a persisted customer, shaped for create and
/// update responses.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerView {
    pub id: CustomerId,
    pub shop_id: ShopId,
    pub email: String,
    pub name: String,
    pub status: CustomerStatus,
    pub assigned_to_user_id: Option<UserId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CustomerView {
    /// Builds the view from an aggregate that has been through the
    /// repository. A missing id means the repository broke its contract.
    pub fn from_persisted(customer: &Customer) -> Result<Self, CustomerError> {
        let id = customer.id().ok_or_else(|| {
            CustomerError::Infrastructure("persisted customer has no id".to_string())
        })?;
        Ok(Self {
            id,
            shop_id: customer.shop_id(),
            email: customer.email().to_string(),
            name: customer.name().to_string(),
            status: customer.status(),
            assigned_to_user_id: customer.assigned_to_user_id(),
            created_at: customer.created_at(),
            updated_at: customer.updated_at(),
        })
    }
}
