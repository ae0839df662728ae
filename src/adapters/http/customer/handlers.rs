//! HTTP handlers for customer endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::customer::{
    CreateCustomerCommand, CreateCustomerHandler, CustomerError, GetCustomerDetailHandler,
    ListCustomersHandler, ListCustomersQuery, UpdateCustomerCommand, UpdateCustomerHandler,
};
use crate::domain::foundation::{CustomerId, ShopId, UserId};

use super::dto::{
    CreateCustomerRequest, CustomerDetailResponse, CustomerListResponse, CustomerResponse,
    ListCustomersParams, UpdateCustomerRequest,
};

/// State shared by all customer endpoints.
#[derive(Clone)]
pub struct CustomerHandlers {
    create_handler: Arc<CreateCustomerHandler>,
    update_handler: Arc<UpdateCustomerHandler>,
    list_handler: Arc<ListCustomersHandler>,
    detail_handler: Arc<GetCustomerDetailHandler>,
}

impl CustomerHandlers {
    pub fn new(
        create_handler: Arc<CreateCustomerHandler>,
        update_handler: Arc<UpdateCustomerHandler>,
        list_handler: Arc<ListCustomersHandler>,
        detail_handler: Arc<GetCustomerDetailHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            list_handler,
            detail_handler,
        }
    }
}

/// POST /api/customers/ - register a customer.
pub async fn create_customer(
    State(handlers): State<CustomerHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateCustomerRequest>,
) -> Response {
    let cmd = CreateCustomerCommand {
        shop_id: ShopId::new(req.shop_id),
        email: req.email,
        name: req.name,
        assigned_to_user_id: req.assigned_to_user_id.map(UserId::new),
        status: req.status,
    };

    match handlers.create_handler.handle(cmd, &user).await {
        Ok(view) => (StatusCode::CREATED, Json(CustomerResponse::from(view))).into_response(),
        Err(e) => handle_customer_error(e),
    }
}

/// PATCH /api/customers/:id - partial update.
pub async fn update_customer(
    State(handlers): State<CustomerHandlers>,
    RequireAuth(user): RequireAuth,
    Path(customer_id): Path<i64>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Response {
    let cmd = UpdateCustomerCommand {
        name: req.name,
        email: req.email,
        assigned_to_user_id: req.assigned_to_user_id.map(UserId::new),
        status: req.status,
    };

    match handlers
        .update_handler
        .handle(CustomerId::new(customer_id), cmd, &user)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(CustomerResponse::from(view))).into_response(),
        Err(e) => handle_customer_error(e),
    }
}

/// GET /api/customers/ - paginated list.
pub async fn list_customers(
    State(handlers): State<CustomerHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListCustomersParams>,
) -> Response {
    let query = ListCustomersQuery {
        page: params.page,
        page_size: params.page_size,
        shop_id: params.shop_id.map(ShopId::new),
        status: params.status,
        assigned_to_me: params.assigned_to_me,
        assigned_to_user_id: params.assigned_to_user_id.map(UserId::new),
        search: params.keyword,
    };

    match handlers.list_handler.handle(query, &user).await {
        Ok(page) => (StatusCode::OK, Json(CustomerListResponse::from(page))).into_response(),
        Err(e) => handle_customer_error(e),
    }
}

/// GET /api/customers/:id - detail view.
pub async fn get_customer_detail(
    State(handlers): State<CustomerHandlers>,
    RequireAuth(user): RequireAuth,
    Path(customer_id): Path<i64>,
) -> Response {
    match handlers
        .detail_handler
        .handle(CustomerId::new(customer_id), &user)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(CustomerDetailResponse::from(view))).into_response(),
        Err(e) => handle_customer_error(e),
    }
}

fn handle_customer_error(e: CustomerError) -> Response {
    match e {
        CustomerError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("Inactive user")),
        )
            .into_response(),
        CustomerError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!("Customer {} not found", id))),
        )
            .into_response(),
        CustomerError::ShopNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!("Shop {} not found", id))),
        )
            .into_response(),
        CustomerError::DuplicateEmail(email) => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::bad_request("Customer email already exists in this shop")
                    .with_details(serde_json::json!({ "email": email })),
            ),
        )
            .into_response(),
        CustomerError::InvalidInput(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        CustomerError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "customer use case failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
    }
}
