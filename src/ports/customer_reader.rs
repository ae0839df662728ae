//! Customer read-side port.
//!
//! List and detail screens need joined data (shop name, assignee name,
//! visit stats, recent related records) that the write-side aggregate does
//! not carry. The reader returns flat view structs shaped for those screens
//! and leaves the aggregate alone.

use crate::domain::activity::ActivityType;
use crate::domain::customer::CustomerStatus;
use crate::domain::foundation::{
    ActivityId, CustomerId, DomainError, NoteId, OpportunityId, OpportunityStageId, ShopId,
    Timestamp, UserId,
};
use crate::domain::opportunity::OpportunityStatus;
use async_trait::async_trait;
use chrono::NaiveDate;

/// How many recent activities, notes, and opportunities the detail view
/// carries per section.
pub const RECENT_ITEM_LIMIT: usize = 5;

/// Filters accepted by the customer list.
///
/// `None` means "no constraint". When `assigned_to_user_id` is set it takes
/// precedence over any other assignee criterion the caller may have built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerListFilter {
    pub shop_id: Option<ShopId>,
    pub status: Option<CustomerStatus>,
    pub assigned_to_user_id: Option<UserId>,
    pub search: Option<String>,
}

/// One row of the customer list.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummaryView {
    pub id: CustomerId,
    pub email: String,
    pub name: String,
    pub status: CustomerStatus,
    pub shop_id: ShopId,
    pub shop_name: String,
    pub assigned_to_user_id: Option<UserId>,
    pub assigned_to_user_name: Option<String>,
    pub visit_count: i64,
    pub last_visit_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// A recent activity on the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummaryView {
    pub id: ActivityId,
    pub activity_type: ActivityType,
    pub subject: String,
    pub occurred_at: Timestamp,
    pub created_by_user_name: Option<String>,
}

/// A recent note on the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSummaryView {
    pub id: NoteId,
    pub body: String,
    pub created_at: Timestamp,
    pub created_by_user_name: Option<String>,
}

/// Pipeline stage of an opportunity.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityStageView {
    pub id: OpportunityStageId,
    pub name: String,
    pub is_won: bool,
    pub is_lost: bool,
}

/// A recent opportunity on the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunitySummaryView {
    pub id: OpportunityId,
    pub title: String,
    pub amount: Option<f64>,
    pub probability: Option<i32>,
    pub status: OpportunityStatus,
    pub expected_close_date: Option<NaiveDate>,
    pub stage: Option<OpportunityStageView>,
}

/// Full detail projection: the summary row plus its recent related records.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetailView {
    pub summary: CustomerSummaryView,
    pub recent_activities: Vec<ActivitySummaryView>,
    pub recent_notes: Vec<NoteSummaryView>,
    pub opportunities: Vec<OpportunitySummaryView>,
}

/// Read-side port for customer projections.
#[async_trait]
pub trait CustomerReader: Send + Sync {
    /// Fetches one page of summaries plus the total count across all pages.
    ///
    /// Rows are ordered by creation time, newest first.
    async fn fetch_summaries(
        &self,
        filter: &CustomerListFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(i64, Vec<CustomerSummaryView>), DomainError>;

    /// Fetches the detail projection for one customer.
    ///
    /// Returns `None` if the customer does not exist.
    async fn fetch_detail(&self, id: CustomerId) -> Result<Option<CustomerDetailView>, DomainError>;
}
