//! Request/response types for customer endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::customer::{CustomerPage, CustomerView};
use crate::domain::activity::ActivityType;
use crate::domain::customer::CustomerStatus;
use crate::domain::foundation::{
    ActivityId, CustomerId, NoteId, OpportunityId, OpportunityStageId, ShopId, Timestamp, UserId,
};
use crate::domain::opportunity::OpportunityStatus;
use crate::ports::{
    ActivitySummaryView, CustomerDetailView, CustomerSummaryView, NoteSummaryView,
    OpportunityStageView, OpportunitySummaryView,
};

/// POST /api/customers/ request body.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub shop_id: i64,
    pub email: String,
    pub name: String,
    pub assigned_to_user_id: Option<i64>,
    pub status: Option<CustomerStatus>,
}

/// PATCH /api/customers/{id} request body. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub assigned_to_user_id: Option<i64>,
    pub status: Option<CustomerStatus>,
}

/// GET /api/customers/ query string.
#[derive(Debug, Deserialize, Default)]
pub struct ListCustomersParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub shop_id: Option<i64>,
    pub status: Option<CustomerStatus>,
    #[serde(default)]
    pub assigned_to_me: bool,
    pub assigned_to_user_id: Option<i64>,
    pub keyword: Option<String>,
}

/// Create/update response body.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub shop_id: ShopId,
    pub email: String,
    pub name: String,
    pub status: CustomerStatus,
    pub assigned_to_user_id: Option<UserId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CustomerView> for CustomerResponse {
    fn from(view: CustomerView) -> Self {
        Self {
            id: view.id,
            shop_id: view.shop_id,
            email: view.email,
            name: view.name,
            status: view.status,
            assigned_to_user_id: view.assigned_to_user_id,
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

/// One row of the list response.
#[derive(Debug, Serialize)]
pub struct CustomerSummaryResponse {
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

impl From<CustomerSummaryView> for CustomerSummaryResponse {
    fn from(view: CustomerSummaryView) -> Self {
        Self {
            id: view.id,
            email: view.email,
            name: view.name,
            status: view.status,
            shop_id: view.shop_id,
            shop_name: view.shop_name,
            assigned_to_user_id: view.assigned_to_user_id,
            assigned_to_user_name: view.assigned_to_user_name,
            visit_count: view.visit_count,
            last_visit_at: view.last_visit_at,
            created_at: view.created_at,
        }
    }
}

/// GET /api/customers/ response body.
#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub customer_summaries: Vec<CustomerSummaryResponse>,
}

impl From<CustomerPage> for CustomerListResponse {
    fn from(page: CustomerPage) -> Self {
        Self {
            total_count: page.total_count,
            page: page.page,
            page_size: page.page_size,
            customer_summaries: page
                .customers
                .into_iter()
                .map(CustomerSummaryResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivitySummaryResponse {
    pub id: ActivityId,
    pub activity_type: ActivityType,
    pub subject: String,
    pub occurred_at: Timestamp,
    pub created_by_user_name: Option<String>,
}

impl From<ActivitySummaryView> for ActivitySummaryResponse {
    fn from(view: ActivitySummaryView) -> Self {
        Self {
            id: view.id,
            activity_type: view.activity_type,
            subject: view.subject,
            occurred_at: view.occurred_at,
            created_by_user_name: view.created_by_user_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NoteSummaryResponse {
    pub id: NoteId,
    pub body: String,
    pub created_at: Timestamp,
    pub created_by_user_name: Option<String>,
}

impl From<NoteSummaryView> for NoteSummaryResponse {
    fn from(view: NoteSummaryView) -> Self {
        Self {
            id: view.id,
            body: view.body,
            created_at: view.created_at,
            created_by_user_name: view.created_by_user_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OpportunityStageResponse {
    pub id: OpportunityStageId,
    pub name: String,
    pub is_won: bool,
    pub is_lost: bool,
}

impl From<OpportunityStageView> for OpportunityStageResponse {
    fn from(view: OpportunityStageView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            is_won: view.is_won,
            is_lost: view.is_lost,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OpportunitySummaryResponse {
    pub id: OpportunityId,
    pub title: String,
    pub amount: Option<f64>,
    pub probability: Option<i32>,
    pub status: OpportunityStatus,
    pub expected_close_date: Option<NaiveDate>,
    pub stage: Option<OpportunityStageResponse>,
}

impl From<OpportunitySummaryView> for OpportunitySummaryResponse {
    fn from(view: OpportunitySummaryView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            amount: view.amount,
            probability: view.probability,
            status: view.status,
            expected_close_date: view.expected_close_date,
            stage: view.stage.map(OpportunityStageResponse::from),
        }
    }
}

/// GET /api/customers/{id} response body.
#[derive(Debug, Serialize)]
pub struct CustomerDetailResponse {
    pub summary: CustomerSummaryResponse,
    pub recent_activities: Vec<ActivitySummaryResponse>,
    pub recent_notes: Vec<NoteSummaryResponse>,
    pub opportunities: Vec<OpportunitySummaryResponse>,
}

impl From<CustomerDetailView> for CustomerDetailResponse {
    fn from(view: CustomerDetailView) -> Self {
        Self {
            summary: CustomerSummaryResponse::from(view.summary),
            recent_activities: view
                .recent_activities
                .into_iter()
                .map(ActivitySummaryResponse::from)
                .collect(),
            recent_notes: view
                .recent_notes
                .into_iter()
                .map(NoteSummaryResponse::from)
                .collect(),
            opportunities: view
                .opportunities
                .into_iter()
                .map(OpportunitySummaryResponse::from)
                .collect(),
        }
    }
}
