//! CreateCustomerHandler - command handler for registering customers.

use std::sync::Arc;

use crate::application::customer::{CustomerError, CustomerView};
use crate::domain::customer::{Customer, CustomerStatus};
use crate::domain::foundation::{ShopId, UserId};
use crate::domain::user::User;
use crate::ports::{CustomerRepository, ShopRepository};

/// Command to register a new customer under a shop.
#[derive(Debug, Clone)]
pub struct CreateCustomerCommand {
    pub shop_id: ShopId,
    pub email: String,
    pub name: String,
    pub assigned_to_user_id: Option<UserId>,
    pub status: Option<CustomerStatus>,
}

/// Handler for customer creation.
pub struct CreateCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
    shops: Arc<dyn ShopRepository>,
}

impl CreateCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, shops: Arc<dyn ShopRepository>) -> Self {
        Self { customers, shops }
    }

    pub async fn handle(
        &self,
        cmd: CreateCustomerCommand,
        acting_user: &User,
    ) -> Result<CustomerView, CustomerError> {
        acting_user
            .ensure_active()
            .map_err(|_| CustomerError::Forbidden)?;

        if !self.shops.exists(cmd.shop_id).await? {
            return Err(CustomerError::ShopNotFound(cmd.shop_id));
        }

        // Uniqueness is settled before the domain factory runs, so a taken
        // email always answers DuplicateEmail even when other fields are
        // also bad.
        let email = cmd.email.trim();
        if self.customers.exists_by_email(cmd.shop_id, email).await? {
            return Err(CustomerError::DuplicateEmail(email.to_string()));
        }

        // A customer registered without an explicit assignee belongs to
        // whoever registered them.
        let assignee = cmd.assigned_to_user_id.or(Some(acting_user.id));

        let customer = Customer::create(cmd.shop_id, email, &cmd.name, assignee, cmd.status)?;

        let persisted = self.customers.create(&customer).await?;
        CustomerView::from_persisted(&persisted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CustomerId, DomainError, Timestamp};
    use crate::domain::user::RoleName;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockCustomerRepository {
        existing_emails: Vec<(ShopId, String)>,
        created: Mutex<Vec<Customer>>,
    }

    impl MockCustomerRepository {
        fn empty() -> Self {
            Self {
                existing_emails: Vec::new(),
                created: Mutex::new(Vec::new()),
            }
        }

        fn with_existing_email(shop_id: ShopId, email: &str) -> Self {
            Self {
                existing_emails: vec![(shop_id, email.to_string())],
                created: Mutex::new(Vec::new()),
            }
        }

        fn created(&self) -> Vec<Customer> {
            self.created.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CustomerRepository for MockCustomerRepository {
        async fn exists_by_email(
            &self,
            shop_id: ShopId,
            email: &str,
        ) -> Result<bool, DomainError> {
            Ok(self
                .existing_emails
                .iter()
                .any(|(s, e)| *s == shop_id && e == email))
        }

        async fn create(&self, customer: &Customer) -> Result<Customer, DomainError> {
            self.created.lock().unwrap().push(customer.clone());
            Ok(Customer::from_persistence(
                CustomerId::new(101),
                customer.shop_id(),
                customer.email().to_string(),
                customer.name().to_string(),
                customer.status(),
                customer.assigned_to_user_id(),
                customer.created_at(),
                customer.updated_at(),
            ))
        }

        async fn find_by_id(&self, _id: CustomerId) -> Result<Option<Customer>, DomainError> {
            Ok(None)
        }

        async fn update(&self, _customer: &Customer) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct MockShopRepository {
        known: Vec<ShopId>,
    }

    #[async_trait]
    impl ShopRepository for MockShopRepository {
        async fn exists(&self, id: ShopId) -> Result<bool, DomainError> {
            Ok(self.known.contains(&id))
        }
    }

    fn acting_user(id: i64, active: bool) -> User {
        let now = Timestamp::now();
        User {
            id: UserId::new(id),
            email: "rep@example.com".to_string(),
            full_name: "Sales Rep".to_string(),
            hashed_password: "hash".to_string(),
            is_active: active,
            is_superuser: false,
            timezone: "UTC".to_string(),
            roles: vec![RoleName::Sales],
            created_at: now,
            updated_at: now,
        }
    }

    fn command() -> CreateCustomerCommand {
        CreateCustomerCommand {
            shop_id: ShopId::new(1),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            assigned_to_user_id: None,
            status: None,
        }
    }

    fn handler(
        repo: Arc<MockCustomerRepository>,
        shops: Vec<ShopId>,
    ) -> CreateCustomerHandler {
        CreateCustomerHandler::new(repo, Arc::new(MockShopRepository { known: shops }))
    }

    #[tokio::test]
    async fn creates_customer_and_returns_persisted_view() {
        let repo = Arc::new(MockCustomerRepository::empty());
        let h = handler(repo.clone(), vec![ShopId::new(1)]);

        let view = h.handle(command(), &acting_user(7, true)).await.unwrap();
        assert_eq!(view.id, CustomerId::new(101));
        assert_eq!(view.status, CustomerStatus::Active);
        assert_eq!(repo.created().len(), 1);
    }

    #[tokio::test]
    async fn defaults_assignee_to_acting_user() {
        let repo = Arc::new(MockCustomerRepository::empty());
        let h = handler(repo.clone(), vec![ShopId::new(1)]);

        let view = h.handle(command(), &acting_user(7, true)).await.unwrap();
        assert_eq!(view.assigned_to_user_id, Some(UserId::new(7)));
    }

    #[tokio::test]
    async fn explicit_assignee_wins_over_default() {
        let repo = Arc::new(MockCustomerRepository::empty());
        let h = handler(repo.clone(), vec![ShopId::new(1)]);

        let mut cmd = command();
        cmd.assigned_to_user_id = Some(UserId::new(99));
        let view = h.handle(cmd, &acting_user(7, true)).await.unwrap();
        assert_eq!(view.assigned_to_user_id, Some(UserId::new(99)));
    }

    #[tokio::test]
    async fn rejects_inactive_acting_user() {
        let repo = Arc::new(MockCustomerRepository::empty());
        let h = handler(repo.clone(), vec![ShopId::new(1)]);

        let result = h.handle(command(), &acting_user(7, false)).await;
        assert!(matches!(result, Err(CustomerError::Forbidden)));
        assert!(repo.created().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_shop() {
        let repo = Arc::new(MockCustomerRepository::empty());
        let h = handler(repo.clone(), vec![]);

        let result = h.handle(command(), &acting_user(7, true)).await;
        assert!(matches!(result, Err(CustomerError::ShopNotFound(_))));
    }

    #[tokio::test]
    async fn rejects_duplicate_email_in_same_shop() {
        let repo = Arc::new(MockCustomerRepository::with_existing_email(
            ShopId::new(1),
            "alice@example.com",
        ));
        let h = handler(repo.clone(), vec![ShopId::new(1)]);

        let result = h.handle(command(), &acting_user(7, true)).await;
        assert!(matches!(result, Err(CustomerError::DuplicateEmail(_))));
        assert!(repo.created().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_wins_over_other_validation_failures() {
        let repo = Arc::new(MockCustomerRepository::with_existing_email(
            ShopId::new(1),
            "alice@example.com",
        ));
        let h = handler(repo.clone(), vec![ShopId::new(1)]);

        let mut cmd = command();
        cmd.name = "   ".to_string();
        let result = h.handle(cmd, &acting_user(7, true)).await;
        assert!(matches!(result, Err(CustomerError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn same_email_in_another_shop_is_allowed() {
        let repo = Arc::new(MockCustomerRepository::with_existing_email(
            ShopId::new(2),
            "alice@example.com",
        ));
        let h = handler(repo.clone(), vec![ShopId::new(1)]);

        let result = h.handle(command(), &acting_user(7, true)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_invalid_input_without_persisting() {
        let repo = Arc::new(MockCustomerRepository::empty());
        let h = handler(repo.clone(), vec![ShopId::new(1)]);

        let mut cmd = command();
        cmd.email = "not-an-email".to_string();
        let result = h.handle(cmd, &acting_user(7, true)).await;
        assert!(matches!(result, Err(CustomerError::InvalidInput(_))));
        assert!(repo.created().is_empty());
    }

    #[tokio::test]
    async fn rejects_lost_status_on_creation() {
        let repo = Arc::new(MockCustomerRepository::empty());
        let h = handler(repo.clone(), vec![ShopId::new(1)]);

        let mut cmd = command();
        cmd.status = Some(CustomerStatus::Lost);
        let result = h.handle(cmd, &acting_user(7, true)).await;
        assert!(matches!(result, Err(CustomerError::InvalidInput(_))));
    }
}
