//! Shop CRM server binary.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use shop_crm::adapters::auth::{Argon2PasswordHasher, JwtTokenProvider};
use shop_crm::adapters::http::auth::auth_routes;
use shop_crm::adapters::http::customer::{customer_routes, CustomerHandlers};
use shop_crm::adapters::postgres::{
    PostgresCustomerReader, PostgresCustomerRepository, PostgresShopRepository,
    PostgresUserRepository,
};
use shop_crm::application::auth::AuthService;
use shop_crm::application::customer::{
    CreateCustomerHandler, GetCustomerDetailHandler, ListCustomersHandler, UpdateCustomerHandler,
};
use shop_crm::config::AppConfig;
use shop_crm::ports::{CustomerReader, CustomerRepository, ShopRepository, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Ports
    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let customers: Arc<dyn CustomerRepository> =
        Arc::new(PostgresCustomerRepository::new(pool.clone()));
    let shops: Arc<dyn ShopRepository> = Arc::new(PostgresShopRepository::new(pool.clone()));
    let reader: Arc<dyn CustomerReader> = Arc::new(PostgresCustomerReader::new(pool.clone()));

    // Application services
    let auth = Arc::new(AuthService::new(
        users,
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(JwtTokenProvider::new(&config.auth.secret_key)),
        config.auth.access_token_expire_minutes,
    ));

    let customer_handlers = CustomerHandlers::new(
        Arc::new(CreateCustomerHandler::new(customers.clone(), shops)),
        Arc::new(UpdateCustomerHandler::new(customers)),
        Arc::new(ListCustomersHandler::new(reader.clone())),
        Arc::new(GetCustomerDetailHandler::new(reader)),
    );

    let app = Router::new()
        .nest("/api/auth", auth_routes(auth.clone()))
        .nest("/api/customers", customer_routes(customer_handlers, auth))
        .route("/health", axum::routing::get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
