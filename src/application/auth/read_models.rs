//! Read models returned by authentication use cases.

use crate::domain::foundation::UserId;
use crate::domain::user::User;
use serde::Serialize;

/// Profile of the authenticated user, shaped for the `/me` endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurrentUserView {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub is_superuser: bool,
}

impl From<&User> for CurrentUserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            roles: user.roles.iter().map(|r| r.to_string()).collect(),
            is_superuser: user.is_superuser,
        }
    }
}
