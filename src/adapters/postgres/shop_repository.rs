//! PostgreSQL implementation of ShopRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ShopId};
use crate::ports::ShopRepository;

/// PostgreSQL implementation of ShopRepository.
#[derive(Clone)]
pub struct PostgresShopRepository {
    pool: PgPool,
}

impl PostgresShopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShopRepository for PostgresShopRepository {
    async fn exists(&self, id: ShopId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shops WHERE id = $1")
            .bind(id.as_i64())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("failed to check shop existence: {}", e))
            })?;

        Ok(result.0 > 0)
    }
}
