//! End-to-end tests for the HTTP layer.
//!
//! The full router is assembled exactly as the binary does it, with
//! in-memory ports behind the application handlers and the real JWT
//! provider signing tokens. Requests go through `tower::ServiceExt::oneshot`
//! so routing, middleware, extractors, and error mapping are all exercised.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use shop_crm::adapters::auth::{Argon2PasswordHasher, JwtTokenProvider};
use shop_crm::adapters::http::auth::auth_routes;
use shop_crm::adapters::http::customer::{customer_routes, CustomerHandlers};
use shop_crm::application::auth::AuthService;
use shop_crm::application::customer::{
    CreateCustomerHandler, GetCustomerDetailHandler, ListCustomersHandler, UpdateCustomerHandler,
};
use shop_crm::domain::customer::{Customer, CustomerStatus};
use shop_crm::domain::foundation::{CustomerId, DomainError, ShopId, Timestamp, UserId};
use shop_crm::domain::user::{RoleName, User};
use shop_crm::ports::{
    CustomerDetailView, CustomerListFilter, CustomerReader, CustomerRepository,
    CustomerSummaryView, PasswordHasher, ShopRepository, UserRepository,
};

const PASSWORD: &str = "correct horse battery staple";

// =============================================================================
// In-memory ports
// =============================================================================

struct InMemoryUserRepository {
    users: Vec<User>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }
}

struct InMemoryCustomerRepository {
    customers: Mutex<Vec<Customer>>,
    next_id: AtomicI64,
}

impl InMemoryCustomerRepository {
    fn new() -> Self {
        Self {
            customers: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn exists_by_email(&self, shop_id: ShopId, email: &str) -> Result<bool, DomainError> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.shop_id() == shop_id && c.email() == email))
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let id = CustomerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let persisted = Customer::from_persistence(
            id,
            customer.shop_id(),
            customer.email().to_string(),
            customer.name().to_string(),
            customer.status(),
            customer.assigned_to_user_id(),
            customer.created_at(),
            customer.updated_at(),
        );
        self.customers.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == Some(id))
            .cloned())
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut customers = self.customers.lock().unwrap();
        if let Some(pos) = customers.iter().position(|c| c.id() == customer.id()) {
            customers[pos] = customer.clone();
        }
        Ok(())
    }
}

struct StubShopRepository {
    known: Vec<ShopId>,
}

#[async_trait]
impl ShopRepository for StubShopRepository {
    async fn exists(&self, id: ShopId) -> Result<bool, DomainError> {
        Ok(self.known.contains(&id))
    }
}

struct StubCustomerReader {
    summaries: Vec<CustomerSummaryView>,
    detail: Option<CustomerDetailView>,
}

#[async_trait]
impl CustomerReader for StubCustomerReader {
    async fn fetch_summaries(
        &self,
        _filter: &CustomerListFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(i64, Vec<CustomerSummaryView>), DomainError> {
        let total = self.summaries.len() as i64;
        let page = self
            .summaries
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((total, page))
    }

    async fn fetch_detail(
        &self,
        id: CustomerId,
    ) -> Result<Option<CustomerDetailView>, DomainError> {
        Ok(self
            .detail
            .as_ref()
            .filter(|d| d.summary.id == id)
            .cloned())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

fn sales_rep(hashed_password: String) -> User {
    let now = Timestamp::now();
    User {
        id: UserId::new(1),
        email: "rep@example.com".to_string(),
        full_name: "Sales Rep".to_string(),
        hashed_password,
        is_active: true,
        is_superuser: false,
        timezone: "UTC".to_string(),
        roles: vec![RoleName::Sales],
        created_at: now,
        updated_at: now,
    }
}

fn summary_view(id: i64, name: &str) -> CustomerSummaryView {
    CustomerSummaryView {
        id: CustomerId::new(id),
        email: format!("{}@example.com", name.to_lowercase()),
        name: name.to_string(),
        status: CustomerStatus::Active,
        shop_id: ShopId::new(1),
        shop_name: "Downtown".to_string(),
        assigned_to_user_id: Some(UserId::new(1)),
        assigned_to_user_name: Some("Sales Rep".to_string()),
        visit_count: 3,
        last_visit_at: Some(Timestamp::now()),
        created_at: Timestamp::now(),
    }
}

struct TestApp {
    router: Router,
    token: String,
}

fn build_app(reader: StubCustomerReader) -> TestApp {
    let hasher = Argon2PasswordHasher::new();
    let hashed = hasher.hash(PASSWORD).unwrap();
    let user = sales_rep(hashed);

    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository {
        users: vec![user.clone()],
    });
    let customers: Arc<dyn CustomerRepository> = Arc::new(InMemoryCustomerRepository::new());
    let shops: Arc<dyn ShopRepository> = Arc::new(StubShopRepository {
        known: vec![ShopId::new(1)],
    });
    let reader: Arc<dyn CustomerReader> = Arc::new(reader);

    let auth = Arc::new(AuthService::new(
        users,
        Arc::new(hasher),
        Arc::new(JwtTokenProvider::new("test-secret")),
        30,
    ));
    let token = auth.create_access_token(&user).unwrap().access_token;

    let handlers = CustomerHandlers::new(
        Arc::new(CreateCustomerHandler::new(customers.clone(), shops)),
        Arc::new(UpdateCustomerHandler::new(customers)),
        Arc::new(ListCustomersHandler::new(reader.clone())),
        Arc::new(GetCustomerDetailHandler::new(reader)),
    );

    let router = Router::new()
        .nest("/api/auth", auth_routes(auth.clone()))
        .nest("/api/customers", customer_routes(handlers, auth));

    TestApp { router, token }
}

fn empty_reader() -> StubCustomerReader {
    StubCustomerReader {
        summaries: vec![],
        detail: None,
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

// =============================================================================
// Auth endpoints
// =============================================================================

#[tokio::test]
async fn login_returns_a_bearer_token() {
    let app = build_app(empty_reader());

    let (status, body) = send(
        app.router,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({"email": "rep@example.com", "password": PASSWORD}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert!(body["access_token"].as_str().unwrap().contains('.'));
}

#[tokio::test]
async fn login_with_wrong_password_is_401_with_challenge() {
    let app = build_app(empty_reader());

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({"email": "rep@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

#[tokio::test]
async fn me_returns_the_authenticated_user() {
    let app = build_app(empty_reader());

    let (status, body) = send(
        app.router,
        get_request("/api/auth/me", Some(&app.token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "rep@example.com");
    assert_eq!(body["roles"], json!(["sales"]));
    assert_eq!(body["is_superuser"], false);
}

#[tokio::test]
async fn me_without_a_token_is_401() {
    let app = build_app(empty_reader());

    let (status, _) = send(app.router, get_request("/api/auth/me", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Customer endpoints
// =============================================================================

#[tokio::test]
async fn customer_routes_reject_missing_and_garbage_tokens() {
    let app = build_app(empty_reader());
    let (status, _) = send(app.router, get_request("/api/customers/", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let app = build_app(empty_reader());
    let (status, _) = send(
        app.router,
        get_request("/api/customers/", Some("not-a-jwt")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_customer_returns_201_and_assigns_the_acting_user() {
    let app = build_app(empty_reader());

    let (status, body) = send(
        app.router,
        json_request(
            "POST",
            "/api/customers/",
            Some(&app.token),
            json!({"shop_id": 1, "email": "alice@example.com", "name": "Alice"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["status"], "ACTIVE");
    // No assignee in the request: defaults to whoever made the call.
    assert_eq!(body["assigned_to_user_id"], 1);
}

#[tokio::test]
async fn create_customer_in_unknown_shop_is_404() {
    let app = build_app(empty_reader());

    let (status, body) = send(
        app.router,
        json_request(
            "POST",
            "/api/customers/",
            Some(&app.token),
            json!({"shop_id": 99, "email": "alice@example.com", "name": "Alice"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn duplicate_email_in_the_same_shop_is_400() {
    let app = build_app(empty_reader());
    let create = |token: String| {
        json_request(
            "POST",
            "/api/customers/",
            Some(&token),
            json!({"shop_id": 1, "email": "alice@example.com", "name": "Alice"}),
        )
    };

    let router = app.router.clone();
    let (status, _) = send(router, create(app.token.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app.router, create(app.token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["email"], "alice@example.com");
}

#[tokio::test]
async fn invalid_email_is_400() {
    let app = build_app(empty_reader());

    let (status, _) = send(
        app.router,
        json_request(
            "POST",
            "/api/customers/",
            Some(&app.token),
            json!({"shop_id": 1, "email": "not-an-email", "name": "Alice"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_customer_changes_name_and_status() {
    let app = build_app(empty_reader());

    let router = app.router.clone();
    let (status, created) = send(
        router,
        json_request(
            "POST",
            "/api/customers/",
            Some(&app.token),
            json!({"shop_id": 1, "email": "alice@example.com", "name": "Alice"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        app.router,
        json_request(
            "PATCH",
            &format!("/api/customers/{id}"),
            Some(&app.token),
            json!({"name": "Alicia", "status": "INACTIVE"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alicia");
    assert_eq!(body["status"], "INACTIVE");
    assert_eq!(body["email"], "alice@example.com");
}

#[tokio::test]
async fn update_of_missing_customer_is_404() {
    let app = build_app(empty_reader());

    let (status, _) = send(
        app.router,
        json_request(
            "PATCH",
            "/api/customers/42",
            Some(&app.token),
            json!({"name": "Nobody"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_customers_returns_a_page_with_totals() {
    let reader = StubCustomerReader {
        summaries: (1..=25).map(|i| summary_view(i, "Alice")).collect(),
        detail: None,
    };
    let app = build_app(reader);

    let (status, body) = send(
        app.router,
        get_request("/api/customers/?page=2&page_size=10", Some(&app.token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 25);
    assert_eq!(body["page"], 2);
    assert_eq!(body["page_size"], 10);
    assert_eq!(body["customer_summaries"].as_array().unwrap().len(), 10);
    // Second page starts after the first ten rows.
    assert_eq!(body["customer_summaries"][0]["id"], 11);
}

#[tokio::test]
async fn customer_detail_includes_recent_sections() {
    let summary = summary_view(7, "Alice");
    let reader = StubCustomerReader {
        summaries: vec![summary.clone()],
        detail: Some(CustomerDetailView {
            summary,
            recent_activities: vec![],
            recent_notes: vec![],
            opportunities: vec![],
        }),
    };
    let app = build_app(reader);

    let (status, body) = send(
        app.router,
        get_request("/api/customers/7", Some(&app.token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["id"], 7);
    assert_eq!(body["summary"]["shop_name"], "Downtown");
    assert_eq!(body["summary"]["visit_count"], 3);
    assert!(body["recent_activities"].as_array().unwrap().is_empty());
    assert!(body["recent_notes"].as_array().unwrap().is_empty());
    assert!(body["opportunities"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_customer_detail_is_404() {
    let app = build_app(empty_reader());

    let (status, body) = send(
        app.router,
        get_request("/api/customers/42", Some(&app.token)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
