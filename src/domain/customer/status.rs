//! Customer lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a customer record.
///
/// There is currently no transition restriction between statuses; the only
/// rule is that a customer cannot be *created* as `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Lost,
}

impl CustomerStatus {
    /// Returns the string stored in the `customers.status` column.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "ACTIVE",
            CustomerStatus::Inactive => "INACTIVE",
            CustomerStatus::Lost => "LOST",
        }
    }

    /// Parses a stored status string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(CustomerStatus::Active),
            "INACTIVE" => Some(CustomerStatus::Inactive),
            "LOST" => Some(CustomerStatus::Lost),
            _ => None,
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}
