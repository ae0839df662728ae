//! PostgreSQL adapters implementing the repository and reader ports.

mod customer_reader;
mod customer_repository;
mod shop_repository;
mod user_repository;

pub use customer_reader::PostgresCustomerReader;
pub use customer_repository::PostgresCustomerRepository;
pub use shop_repository::PostgresShopRepository;
pub use user_repository::PostgresUserRepository;

use crate::domain::foundation::DomainError;
use sqlx::postgres::PgRow;
use sqlx::Row;

/// Reads one column off a row, mapping decode failures into the standard
/// database error.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("failed to read column '{}': {}", name, e)))
}
