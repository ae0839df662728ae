//! User role names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a user (many-to-many in the store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Manager,
    Sales,
}

impl RoleName {
    /// Returns the string stored in the `roles.name` column.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "admin",
            RoleName::Manager => "manager",
            RoleName::Sales => "sales",
        }
    }

    /// Parses a stored role name. Unknown names yield `None` so a stale
    /// row cannot poison user loading.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(RoleName::Admin),
            "manager" => Some(RoleName::Manager),
            "sales" => Some(RoleName::Sales),
            _ => None,
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}
