//! UpdateCustomerHandler - partial update of a customer's basic fields.

use std::sync::Arc;

use crate::application::customer::{CustomerError, CustomerView};
use crate::domain::customer::CustomerStatus;
use crate::domain::foundation::{CustomerId, UserId};
use crate::domain::user::User;
use crate::ports::CustomerRepository;

/// Patch command. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomerCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub assigned_to_user_id: Option<UserId>,
    pub status: Option<CustomerStatus>,
}

/// Handler for customer updates.
pub struct UpdateCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl UpdateCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    pub async fn handle(
        &self,
        customer_id: CustomerId,
        cmd: UpdateCustomerCommand,
        acting_user: &User,
    ) -> Result<CustomerView, CustomerError> {
        acting_user
            .ensure_active()
            .map_err(|_| CustomerError::Forbidden)?;

        let mut customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or(CustomerError::NotFound(customer_id))?;

        // Uniqueness only matters when the email actually changes.
        if let Some(email) = cmd.email.as_deref() {
            let email = email.trim();
            if email != customer.email()
                && self
                    .customers
                    .exists_by_email(customer.shop_id(), email)
                    .await?
            {
                return Err(CustomerError::DuplicateEmail(email.to_string()));
            }
        }

        customer.update_basic_info(
            cmd.name.as_deref(),
            cmd.email.as_deref(),
            cmd.assigned_to_user_id,
        )?;

        if let Some(status) = cmd.status {
            customer.change_status(status);
        }

        self.customers.update(&customer).await?;
        CustomerView::from_persisted(&customer)
    }
}
