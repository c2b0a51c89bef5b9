//! Goldvest API server
//!
//! Backend for the gold-investment application: registration/login, KYC
//! submission and admin review, gold price lookup, and investment
//! creation/withdrawal.

use axum::http::{HeaderValue, Method};
use axum::{routing::get, Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

mod auth;
mod config;
mod db;
mod error;
mod gold;
mod handlers;
mod investment;
mod kyc;
mod middleware;
mod models;
mod routes;
mod state;
mod users;

use auth::AuthService;
use config::Config;
use gold::{GoldPriceService, SimulatedPriceSource};
use investment::InvestmentService;
use kyc::{DocumentStore, KycService};
use state::AppState;
use users::UserService;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(environment = config.environment.as_str(), "Starting goldvest server");

    // Initialize database connection pool and schema
    let db_pool = match db::create_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::run_migrations(&db_pool).await {
        tracing::error!("Migration failed: {}", e);
        std::process::exit(1);
    }

    // The upload root must exist before the first document lands
    if let Err(e) = tokio::fs::create_dir_all(&config.upload_dir).await {
        tracing::error!("Failed to create upload directory: {}", e);
        std::process::exit(1);
    }

    // Initialize services
    let auth_service = Arc::new(AuthService::new(
        db_pool.clone(),
        config.jwt_secret.clone(),
        config.jwt_access_token_ttl_seconds,
    ));

    let user_service = Arc::new(UserService::new(db_pool.clone()));

    let kyc_service = Arc::new(KycService::new(db_pool.clone()));

    let gold_service = Arc::new(GoldPriceService::new(
        db_pool.clone(),
        Arc::new(SimulatedPriceSource),
    ));

    let investment_service = Arc::new(InvestmentService::new(
        db_pool.clone(),
        gold_service.clone(),
    ));

    let document_store = Arc::new(DocumentStore::new(&config.upload_dir));

    let app_state = AppState::new(
        auth_service,
        user_service,
        kyc_service,
        investment_service,
        gold_service,
        document_store,
        db_pool.clone(),
    );

    // Create the app router
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(routes::auth_routes())
        .merge(routes::user_routes())
        .merge(routes::admin_routes())
        .merge(routes::gold_routes())
        .merge(routes::investment_routes())
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(configure_cors(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Serve with graceful shutdown
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server shutdown complete");
}

async fn root() -> &'static str {
    "Goldvest API Server"
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    version: String,
}

/// Health check endpoint
async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<HealthResponse> {
    let database = match db::check_health(&state.db_pool).await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let status = if database == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn configure_cors(config: &Config) -> CorsLayer {
    let allowed_origins = config.cors_allowed_origins.clone().unwrap_or_default();

    if allowed_origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
