//! PostgreSQL implementation of CustomerRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::customer::{Customer, CustomerStatus};
use crate::domain::foundation::{CustomerId, DomainError, ErrorCode, ShopId, Timestamp, UserId};
use crate::ports::CustomerRepository;

/// PostgreSQL implementation of CustomerRepository.
#[derive(Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn exists_by_email(&self, shop_id: ShopId, email: &str) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM customers WHERE shop_id = $1 AND email = $2",
        )
        .bind(shop_id.as_i64())
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("failed to check customer email existence: {}", e))
        })?;

        Ok(result.0 > 0)
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO customers (
                shop_id, email, name, status, assigned_to_user_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, shop_id, email, name, status, assigned_to_user_id,
                      created_at, updated_at
            "#,
        )
        .bind(customer.shop_id().as_i64())
        .bind(customer.email())
        .bind(customer.name())
        .bind(customer.status().as_db_str())
        .bind(customer.assigned_to_user_id().map(|id| id.as_i64()))
        .bind(customer.created_at().as_datetime())
        .bind(customer.updated_at().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to insert customer: {}", e)))?;

        row_to_customer(row)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, shop_id, email, name, status, assigned_to_user_id,
                   created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to fetch customer: {}", e)))?;

        row.map(row_to_customer).transpose()
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let id = customer.id().ok_or_else(|| {
            DomainError::internal("cannot update a customer that has not been persisted")
        })?;

        let result = sqlx::query(
            r#"
            UPDATE customers SET
                email = $2,
                name = $3,
                status = $4,
                assigned_to_user_id = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(customer.email())
        .bind(customer.name())
        .bind(customer.status().as_db_str())
        .bind(customer.assigned_to_user_id().map(|id| id.as_i64()))
        .bind(customer.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to update customer: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CustomerNotFound,
                format!("Customer not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_customer(row: PgRow) -> Result<Customer, DomainError> {
    let id: i64 = column(&row, "id")?;
    let shop_id: i64 = column(&row, "shop_id")?;
    let status_str: String = column(&row, "status")?;
    let status = CustomerStatus::from_db_str(&status_str).ok_or_else(|| {
        DomainError::database(format!("invalid customer status: {}", status_str))
    })?;
    let assigned_to: Option<i64> = column(&row, "assigned_to_user_id")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Customer::from_persistence(
        CustomerId::new(id),
        ShopId::new(shop_id),
        column(&row, "email")?,
        column(&row, "name")?,
        status,
        assigned_to.map(UserId::new),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
