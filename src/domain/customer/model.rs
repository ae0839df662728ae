//! Customer aggregate.

use crate::domain::foundation::{CustomerId, ShopId, Timestamp, UserId};

use super::{CustomerStatus, CustomerValidationError};

/// A customer record belonging to a retail shop.
///
/// Construct new customers through [`Customer::create`], which enforces the
/// creation invariants; hydrate stored rows through
/// [`Customer::from_persistence`]. Mutation goes through the guarded methods,
/// which bump `updated_at` only when a field actually changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: Option<CustomerId>,
    shop_id: ShopId,
    email: String,
    name: String,
    status: CustomerStatus,
    assigned_to_user_id: Option<UserId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

fn validate_email(email: &str) -> Result<(), CustomerValidationError> {
    if !email.contains('@') {
        return Err(CustomerValidationError::InvalidEmail);
    }
    Ok(())
}

impl Customer {
    /// Creates a new, not-yet-persisted customer.
    ///
    /// Trims name and email, rejects blanks and malformed emails, defaults
    /// the status to `Active`, and refuses creation-time `Lost`.
    pub fn create(
        shop_id: ShopId,
        email: &str,
        name: &str,
        assigned_to_user_id: Option<UserId>,
        status: Option<CustomerStatus>,
    ) -> Result<Self, CustomerValidationError> {
        let email = email.trim();
        let name = name.trim();

        if email.is_empty() {
            return Err(CustomerValidationError::BlankField { field: "email" });
        }
        if name.is_empty() {
            return Err(CustomerValidationError::BlankField { field: "name" });
        }
        validate_email(email)?;

        let status = status.unwrap_or(CustomerStatus::Active);
        if status == CustomerStatus::Lost {
            return Err(CustomerValidationError::LostOnCreate);
        }

        let now = Timestamp::now();
        Ok(Self {
            id: None,
            shop_id,
            email: email.to_string(),
            name: name.to_string(),
            status,
            assigned_to_user_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrates a customer from stored column values. No validation: the
    /// store is trusted to hold rows this aggregate wrote.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: CustomerId,
        shop_id: ShopId,
        email: String,
        name: String,
        status: CustomerStatus,
        assigned_to_user_id: Option<UserId>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id: Some(id),
            shop_id,
            email,
            name,
            status,
            assigned_to_user_id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Option<CustomerId> {
        self.id
    }

    pub fn shop_id(&self) -> ShopId {
        self.shop_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> CustomerStatus {
        self.status
    }

    pub fn assigned_to_user_id(&self) -> Option<UserId> {
        self.assigned_to_user_id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Applies a partial update of name, email, and assignee.
    ///
    /// `None` means "leave unchanged". Set fields are trimmed and validated;
    /// `updated_at` is bumped only if at least one field really changed.
    pub fn update_basic_info(
        &mut self,
        name: Option<&str>,
        email: Option<&str>,
        assigned_to_user_id: Option<UserId>,
    ) -> Result<(), CustomerValidationError> {
        let mut changed = false;

        if let Some(name) = name {
            let name = name.trim();
            if name.is_empty() {
                return Err(CustomerValidationError::BlankField { field: "name" });
            }
            if name != self.name {
                self.name = name.to_string();
                changed = true;
            }
        }

        if let Some(email) = email {
            let email = email.trim();
            if email.is_empty() {
                return Err(CustomerValidationError::BlankField { field: "email" });
            }
            validate_email(email)?;
            if email != self.email {
                self.email = email.to_string();
                changed = true;
            }
        }

        if let Some(assignee) = assigned_to_user_id {
            if Some(assignee) != self.assigned_to_user_id {
                self.assigned_to_user_id = Some(assignee);
                changed = true;
            }
        }

        if changed {
            self.updated_at = Timestamp::now();
        }
        Ok(())
    }

    /// Moves the customer to a new status.
    ///
    /// Same-status calls are no-ops. Any status may move to any other;
    /// transition rules would slot in here if the business ever adds them.
    pub fn change_status(&mut self, new_status: CustomerStatus) {
        if new_status == self.status {
            return;
        }
        self.status = new_status;
        self.updated_at = Timestamp::now();
    }
}
