//! Activity read-side types.
//!
//! Activities are never mutated by this core; the enum exists so read models
//! and the wire format agree on the permitted kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a customer-facing activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Call,
    Visit,
    Email,
    Meeting,
    Other,
}

impl ActivityType {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ActivityType::Call => "CALL",
            ActivityType::Visit => "VISIT",
            ActivityType::Email => "EMAIL",
            ActivityType::Meeting => "MEETING",
            ActivityType::Other => "OTHER",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "CALL" => Some(ActivityType::Call),
            "VISIT" => Some(ActivityType::Visit),
            "EMAIL" => Some(ActivityType::Email),
            "MEETING" => Some(ActivityType::Meeting),
            "OTHER" => Some(ActivityType::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}
