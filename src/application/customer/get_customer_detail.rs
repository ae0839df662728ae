//! GetCustomerDetailHandler - detail projection for one customer.

use std::sync::Arc;

use crate::application::customer::CustomerError;
use crate::domain::foundation::CustomerId;
use crate::domain::user::User;
use crate::ports::{CustomerDetailView, CustomerReader};

/// Handler for the customer detail view.
pub struct GetCustomerDetailHandler {
    reader: Arc<dyn CustomerReader>,
}

impl GetCustomerDetailHandler {
    pub fn new(reader: Arc<dyn CustomerReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        customer_id: CustomerId,
        acting_user: &User,
    ) -> Result<CustomerDetailView, CustomerError> {
        acting_user
            .ensure_active()
            .map_err(|_| CustomerError::Forbidden)?;

        self.reader
            .fetch_detail(customer_id)
            .await?
            .ok_or(CustomerError::NotFound(customer_id))
    }
}
