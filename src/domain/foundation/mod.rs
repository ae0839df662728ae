//! Foundation value objects shared by every domain module.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{ActivityId, CustomerId, NoteId, OpportunityId, OpportunityStageId, ShopId, UserId};
pub use timestamp::Timestamp;
