//! ListCustomersHandler - paginated customer list for the logged-in user.

use std::sync::Arc;

use crate::application::customer::CustomerError;
use crate::domain::customer::CustomerStatus;
use crate::domain::foundation::{ShopId, UserId};
use crate::domain::user::User;
use crate::ports::{CustomerListFilter, CustomerReader, CustomerSummaryView};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// List query as received from the caller, before normalization.
#[derive(Debug, Clone, Default)]
pub struct ListCustomersQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub shop_id: Option<ShopId>,
    pub status: Option<CustomerStatus>,
    pub assigned_to_me: bool,
    pub assigned_to_user_id: Option<UserId>,
    pub search: Option<String>,
}

/// One page of customer summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPage {
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub customers: Vec<CustomerSummaryView>,
}

/// Clamps a requested page number to 1 or above.
fn normalize_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamps a requested page size into `1..=100`, defaulting to 20.
fn normalize_page_size(page_size: Option<i64>) -> i64 {
    page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Handler for the customer list.
pub struct ListCustomersHandler {
    reader: Arc<dyn CustomerReader>,
}

impl ListCustomersHandler {
    pub fn new(reader: Arc<dyn CustomerReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListCustomersQuery,
        acting_user: &User,
    ) -> Result<CustomerPage, CustomerError> {
        acting_user
            .ensure_active()
            .map_err(|_| CustomerError::Forbidden)?;

        let page = normalize_page(query.page);
        let page_size = normalize_page_size(query.page_size);
        // Saturating: an absurd page number yields an empty page, not an
        // overflow.
        let offset = (page - 1).saturating_mul(page_size);

        // "My customers" wins over any explicit assignee filter.
        let assigned_to_user_id = if query.assigned_to_me {
            Some(acting_user.id)
        } else {
            query.assigned_to_user_id
        };

        let filter = CustomerListFilter {
            shop_id: query.shop_id,
            status: query.status,
            assigned_to_user_id,
            search: query.search,
        };

        let (total_count, customers) = self
            .reader
            .fetch_summaries(&filter, page_size, offset)
            .await?;

        Ok(CustomerPage {
            total_count,
            page,
            page_size,
            customers,
        })
    }
}
