//! PostgreSQL implementation of CustomerReader.
//!
//! Read-optimized queries joining customers with shops, assignees, and
//! reservation aggregates. Optional filters use the `($n IS NULL OR ...)`
//! pattern so one prepared statement serves every filter combination.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::activity::ActivityType;
use crate::domain::customer::CustomerStatus;
use crate::domain::foundation::{
    ActivityId, CustomerId, DomainError, NoteId, OpportunityId, OpportunityStageId, ShopId,
    Timestamp, UserId,
};
use crate::domain::opportunity::OpportunityStatus;
use crate::ports::{
    ActivitySummaryView, CustomerDetailView, CustomerListFilter, CustomerReader,
    CustomerSummaryView, NoteSummaryView, OpportunityStageView, OpportunitySummaryView,
    RECENT_ITEM_LIMIT,
};

/// PostgreSQL implementation of CustomerReader.
#[derive(Clone)]
pub struct PostgresCustomerReader {
    pool: PgPool,
}

impl PostgresCustomerReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SUMMARY_SELECT: &str = r#"
    SELECT c.id, c.email, c.name, c.status, c.shop_id, s.name AS shop_name,
           c.assigned_to_user_id, u.full_name AS assigned_to_user_name,
           COUNT(r.id) AS visit_count,
           MAX(r.start_datetime) AS last_visit_at,
           c.created_at
    FROM customers c
    JOIN shops s ON s.id = c.shop_id
    LEFT JOIN users u ON u.id = c.assigned_to_user_id
    LEFT JOIN reservations r ON r.customer_id = c.id
"#;

const SUMMARY_GROUP_BY: &str = r#"
    GROUP BY c.id, c.email, c.name, c.status, c.shop_id, s.name,
             c.assigned_to_user_id, u.full_name, c.created_at
"#;

const LIST_FILTER: &str = r#"
    WHERE ($1::bigint IS NULL OR c.shop_id = $1)
      AND ($2::text IS NULL OR c.status = $2)
      AND ($3::bigint IS NULL OR c.assigned_to_user_id = $3)
      AND ($4::text IS NULL
           OR c.name ILIKE '%' || $4 || '%'
           OR c.email ILIKE '%' || $4 || '%')
"#;

#[async_trait]
impl CustomerReader for PostgresCustomerReader {
    async fn fetch_summaries(
        &self,
        filter: &CustomerListFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(i64, Vec<CustomerSummaryView>), DomainError> {
        let shop_id = filter.shop_id.map(|id| id.as_i64());
        let status = filter.status.map(|s| s.as_db_str());
        let assignee = filter.assigned_to_user_id.map(|id| id.as_i64());
        let search = filter.search.as_deref();

        let count_sql = format!("SELECT COUNT(*) FROM customers c {LIST_FILTER}");
        let total: (i64,) = sqlx::query_as(&count_sql)
            .bind(shop_id)
            .bind(status)
            .bind(assignee)
            .bind(search)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to count customers: {}", e)))?;

        let list_sql = format!(
            "{SUMMARY_SELECT} {LIST_FILTER} {SUMMARY_GROUP_BY} \
             ORDER BY c.created_at DESC LIMIT $5 OFFSET $6"
        );
        let rows = sqlx::query(&list_sql)
            .bind(shop_id)
            .bind(status)
            .bind(assignee)
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("failed to list customers: {}", e)))?;

        let summaries: Result<Vec<CustomerSummaryView>, DomainError> =
            rows.into_iter().map(row_to_summary).collect();

        Ok((total.0, summaries?))
    }

    async fn fetch_detail(
        &self,
        id: CustomerId,
    ) -> Result<Option<CustomerDetailView>, DomainError> {
        let detail_sql = format!("{SUMMARY_SELECT} WHERE c.id = $1 {SUMMARY_GROUP_BY}");
        let row = sqlx::query(&detail_sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("failed to fetch customer summary: {}", e))
            })?;

        let summary = match row {
            Some(row) => row_to_summary(row)?,
            None => return Ok(None),
        };

        let recent_activities = self.fetch_recent_activities(id).await?;
        let recent_notes = self.fetch_recent_notes(id).await?;
        let opportunities = self.fetch_recent_opportunities(id).await?;

        Ok(Some(CustomerDetailView {
            summary,
            recent_activities,
            recent_notes,
            opportunities,
        }))
    }
}

impl PostgresCustomerReader {
    async fn fetch_recent_activities(
        &self,
        id: CustomerId,
    ) -> Result<Vec<ActivitySummaryView>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.activity_type, a.subject, a.occurred_at,
                   u.full_name AS created_by_user_name
            FROM activities a
            LEFT JOIN users u ON u.id = a.created_by_user_id
            WHERE a.customer_id = $1
            ORDER BY a.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(id.as_i64())
        .bind(RECENT_ITEM_LIMIT as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to fetch activities: {}", e)))?;

        rows.into_iter().map(row_to_activity).collect()
    }

    async fn fetch_recent_notes(
        &self,
        id: CustomerId,
    ) -> Result<Vec<NoteSummaryView>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT n.id, n.body, n.created_at, u.full_name AS created_by_user_name
            FROM notes n
            LEFT JOIN users u ON u.id = n.created_by_user_id
            WHERE n.customer_id = $1
            ORDER BY n.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(id.as_i64())
        .bind(RECENT_ITEM_LIMIT as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to fetch notes: {}", e)))?;

        rows.into_iter().map(row_to_note).collect()
    }

    async fn fetch_recent_opportunities(
        &self,
        id: CustomerId,
    ) -> Result<Vec<OpportunitySummaryView>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT o.id, o.title, o.amount, o.probability, o.status,
                   o.expected_close_date,
                   st.id AS stage_id, st.name AS stage_name, st.is_won, st.is_lost
            FROM opportunities o
            LEFT JOIN opportunity_stages st ON st.id = o.stage_id
            WHERE o.customer_id = $1
            ORDER BY o.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(id.as_i64())
        .bind(RECENT_ITEM_LIMIT as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("failed to fetch opportunities: {}", e)))?;

        rows.into_iter().map(row_to_opportunity).collect()
    }
}

fn row_to_summary(row: PgRow) -> Result<CustomerSummaryView, DomainError> {
    let id: i64 = column(&row, "id")?;
    let shop_id: i64 = column(&row, "shop_id")?;
    let status_str: String = column(&row, "status")?;
    let status = CustomerStatus::from_db_str(&status_str).ok_or_else(|| {
        DomainError::database(format!("invalid customer status: {}", status_str))
    })?;
    let assigned_to: Option<i64> = column(&row, "assigned_to_user_id")?;
    let last_visit_at: Option<chrono::DateTime<chrono::Utc>> = column(&row, "last_visit_at")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    Ok(CustomerSummaryView {
        id: CustomerId::new(id),
        email: column(&row, "email")?,
        name: column(&row, "name")?,
        status,
        shop_id: ShopId::new(shop_id),
        shop_name: column(&row, "shop_name")?,
        assigned_to_user_id: assigned_to.map(UserId::new),
        assigned_to_user_name: column(&row, "assigned_to_user_name")?,
        visit_count: column(&row, "visit_count")?,
        last_visit_at: last_visit_at.map(Timestamp::from_datetime),
        created_at: Timestamp::from_datetime(created_at),
    })
}

fn row_to_activity(row: PgRow) -> Result<ActivitySummaryView, DomainError> {
    let id: i64 = column(&row, "id")?;
    let type_str: String = column(&row, "activity_type")?;
    let activity_type = ActivityType::from_db_str(&type_str)
        .ok_or_else(|| DomainError::database(format!("invalid activity type: {}", type_str)))?;
    let occurred_at: chrono::DateTime<chrono::Utc> = column(&row, "occurred_at")?;

    Ok(ActivitySummaryView {
        id: ActivityId::new(id),
        activity_type,
        subject: column(&row, "subject")?,
        occurred_at: Timestamp::from_datetime(occurred_at),
        created_by_user_name: column(&row, "created_by_user_name")?,
    })
}

fn row_to_note(row: PgRow) -> Result<NoteSummaryView, DomainError> {
    let id: i64 = column(&row, "id")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    Ok(NoteSummaryView {
        id: NoteId::new(id),
        body: column(&row, "body")?,
        created_at: Timestamp::from_datetime(created_at),
        created_by_user_name: column(&row, "created_by_user_name")?,
    })
}

fn row_to_opportunity(row: PgRow) -> Result<OpportunitySummaryView, DomainError> {
    let id: i64 = column(&row, "id")?;
    let status_str: String = column(&row, "status")?;
    let status = OpportunityStatus::from_db_str(&status_str).ok_or_else(|| {
        DomainError::database(format!("invalid opportunity status: {}", status_str))
    })?;

    let stage_id: Option<i64> = column(&row, "stage_id")?;
    let stage = match stage_id {
        Some(stage_id) => Some(OpportunityStageView {
            id: OpportunityStageId::new(stage_id),
            name: column(&row, "stage_name")?,
            is_won: column(&row, "is_won")?,
            is_lost: column(&row, "is_lost")?,
        }),
        None => None,
    };

    Ok(OpportunitySummaryView {
        id: OpportunityId::new(id),
        title: column(&row, "title")?,
        amount: column(&row, "amount")?,
        probability: column(&row, "probability")?,
        status,
        expected_close_date: column(&row, "expected_close_date")?,
        stage,
    })
}
