//! User entity.

use crate::domain::foundation::{Timestamp, UserId};

use super::{RoleName, UserError};

/// An application user (sales rep, manager, admin).
///
/// A plain record as far as this core is concerned: repositories hydrate it,
/// use cases read it. The single piece of domain behaviour is
/// [`User::ensure_active`], which every use case calls before acting on the
/// user's behalf.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub timezone: String,
    pub roles: Vec<RoleName>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Fails with [`UserError::Inactive`] unless the account is active.
    ///
    /// Callers map this into their own failure: authentication treats it as
    /// a credential failure, customer use cases as an authorization failure.
    pub fn ensure_active(&self) -> Result<(), UserError> {
        if self.is_active {
            Ok(())
        } else {
            Err(UserError::Inactive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(active: bool) -> User {
        let now = Timestamp::now();
        User {
            id: UserId::new(1),
            email: "rep@example.com".to_string(),
            full_name: "Sales Rep".to_string(),
            hashed_password: "$argon2id$stub".to_string(),
            is_active: active,
            is_superuser: false,
            timezone: "UTC".to_string(),
            roles: vec![RoleName::Sales],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn active_user_passes_the_gate() {
        assert!(user(true).ensure_active().is_ok());
    }

    #[test]
    fn inactive_user_is_rejected() {
        assert_eq!(user(false).ensure_active(), Err(UserError::Inactive));
    }
}
