//! Roster API Server
//!
//! A CRUD backend for companies and their employees, backed by PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod dto;
mod entity;
mod error;
mod handlers;



use adapters::{ensure_schema, PostgresCompanyRepository, PostgresEmployeeRepository};
use app::{CompanyService, EmployeeService};
use config::Config;
use domain::ports::{CompanyRepository, EmployeeRepository};

/// Application state shared across all handlers
pub struct AppState<CR, ER>
where
    CR: CompanyRepository,
    ER: EmployeeRepository,
{
    pub company_service: Arc<CompanyService<CR>>,
    pub employee_service: Arc<EmployeeService<ER>>,
}

// Derived Clone would require CR: Clone and ER: Clone
impl<CR, ER> Clone for AppState<CR, ER>
where
    CR: CompanyRepository,
    ER: EmployeeRepository,
{
    fn clone(&self) -> Self {
        Self {
            company_service: self.company_service.clone(),
            employee_service: self.employee_service.clone(),
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

/// Build the HTTP router over the given state
pub fn build_router<CR, ER>(state: AppState<CR, ER>, cors_allow_any: bool) -> Router
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Companies
        .route(
            "/companies",
            get(handlers::list_companies::<CR, ER>).post(handlers::create_company::<CR, ER>),
        )
        .route(
            "/companies/:id",
            get(handlers::get_company::<CR, ER>)
                .put(handlers::update_company::<CR, ER>)
                .delete(handlers::delete_company::<CR, ER>),
        )
        .route(
            "/companies/:id/employees",
            get(handlers::list_company_employees::<CR, ER>),
        )
        // Employees
        .route(
            "/employees",
            get(handlers::list_employees::<CR, ER>).post(handlers::create_employee::<CR, ER>),
        )
        .route(
            "/employees/:id",
            get(handlers::get_employee::<CR, ER>)
                .put(handlers::update_employee::<CR, ER>)
                .delete(handlers::delete_employee::<CR, ER>),
        );

    // Middleware
    let app = if cors_allow_any {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roster_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.auto_migrate {
        ensure_schema(&db)
            .await
            .context("Failed to create database schema")?;
    }

    // Create adapters
    let company_repo = Arc::new(PostgresCompanyRepository::new(db.clone()));
    let employee_repo = Arc::new(PostgresEmployeeRepository::new(db));

    // Create application services
    let state = AppState {
        company_service: Arc::new(CompanyService::new(company_repo)),
        employee_service: Arc::new(EmployeeService::new(employee_repo)),
    };

    let app = build_router(state, config.cors_allow_any);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
