//! Opportunity read-side types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a sales opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpportunityStatus {
    Open,
    Won,
    Lost,
    OnHold,
}

impl OpportunityStatus {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            OpportunityStatus::Open => "OPEN",
            OpportunityStatus::Won => "WON",
            OpportunityStatus::Lost => "LOST",
            OpportunityStatus::OnHold => "ON_HOLD",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "OPEN" => Some(OpportunityStatus::Open),
            "WON" => Some(OpportunityStatus::Won),
            "LOST" => Some(OpportunityStatus::Lost),
            "ON_HOLD" => Some(OpportunityStatus::OnHold),
            _ => None,
        }
    }
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}
