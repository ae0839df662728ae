//! Strongly-typed identifier value objects.
//!
//! The relational schema is integer-keyed, so every identifier wraps an `i64`
//! assigned by the store. A wrapped id always refers to a persisted row;
//! entities that have not been persisted yet carry `Option<…Id>` instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a store-assigned identifier.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw integer key.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(
    /// Unique identifier for an application user.
    UserId
);
define_id!(
    /// Unique identifier for a retail shop.
    ShopId
);
define_id!(
    /// Unique identifier for a customer record.
    CustomerId
);
define_id!(
    /// Unique identifier for an activity entry.
    ActivityId
);
define_id!(
    /// Unique identifier for a customer note.
    NoteId
);
define_id!(
    /// Unique identifier for a sales opportunity.
    OpportunityId
);
define_id!(
    /// Unique identifier for an opportunity pipeline stage.
    OpportunityStageId
);
