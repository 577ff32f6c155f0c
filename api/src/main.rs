//! Accounts API Server
//!
//! Banking accounts microservice: register a customer with a savings
//! account, then fetch, update or delete them by mobile number.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{Auditor, PostgresUnitOfWork, SystemClock};
use app::AccountsService;
use config::Config;
use domain::ports::UnitOfWork;

/// Application state shared across all handlers
///
/// Generic over the unit of work so the router can be driven by in-memory
/// repositories in tests.
pub struct AppState<U: UnitOfWork> {
    pub accounts_service: Arc<AccountsService<U>>,
}

impl<U: UnitOfWork> Clone for AppState<U> {
    fn clone(&self) -> Self {
        Self {
            accounts_service: self.accounts_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn build_router<U: UnitOfWork + 'static>(state: AppState<U>) -> Router {
    let api = Router::new()
        .route("/create", post(handlers::create_account::<U>))
        .route("/fetch", get(handlers::fetch_account::<U>))
        .route("/update", put(handlers::update_account::<U>))
        .route("/delete", delete(handlers::delete_account::<U>));

    Router::new()
        // Health check
        .route("/health", get(health))
        .nest("/api", api)
        // Middleware
        .layer(middleware::from_fn(error::attach_api_path))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,accounts_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting accounts API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters; every write goes through the audit stamper
    let auditor = Auditor::new(config.audit_actor.clone(), Arc::new(SystemClock));
    let uow = Arc::new(PostgresUnitOfWork::new(db, auditor));

    // Create application services
    let accounts_service = Arc::new(AccountsService::new(uow));

    let app = build_router(AppState { accounts_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
