//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::user::{RoleName, User};
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
///
/// Roles are aggregated into the user row in one query; unknown role names in
/// the store are dropped rather than failing the whole load.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_SELECT: &str = r#"
    SELECT u.id, u.email, u.full_name, u.hashed_password,
           u.is_active, u.is_superuser, u.timezone,
           u.created_at, u.updated_at,
           COALESCE(array_agg(r.name) FILTER (WHERE r.name IS NOT NULL), '{}') AS role_names
    FROM users u
    LEFT JOIN user_roles ur ON ur.user_id = u.id
    LEFT JOIN roles r ON r.id = ur.role_id
"#;

const USER_GROUP_BY: &str = r#"
    GROUP BY u.id, u.email, u.full_name, u.hashed_password,
             u.is_active, u.is_superuser, u.timezone,
             u.created_at, u.updated_at
"#;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let sql = format!("{USER_SELECT} WHERE u.email = $1 {USER_GROUP_BY}");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to fetch user by email: {}", e)))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let sql = format!("{USER_SELECT} WHERE u.id = $1 {USER_GROUP_BY}");
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to fetch user by id: {}", e)))?;

        row.map(row_to_user).transpose()
    }
}

fn row_to_user(row: PgRow) -> Result<User, DomainError> {
    let id: i64 = column(&row, "id")?;
    let role_names: Vec<String> = column(&row, "role_names")?;
    let roles: Vec<RoleName> = role_names
        .iter()
        .filter_map(|name| RoleName::from_db_str(name))
        .collect();

    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(User {
        id: UserId::new(id),
        email: column(&row, "email")?,
        full_name: column(&row, "full_name")?,
        hashed_password: column(&row, "hashed_password")?,
        is_active: column(&row, "is_active")?,
        is_superuser: column(&row, "is_superuser")?,
        timezone: column(&row, "timezone")?,
        roles,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}
