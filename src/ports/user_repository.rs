//! User repository port.
//!
//! Read-only: users are provisioned outside this core, so the contract is
//! limited to the two lookups authentication needs.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

/// Repository port for user lookup.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email, roles included.
    ///
    /// Returns `None` if no user has that email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id, roles included.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
}
