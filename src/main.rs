//! Underwriting Service - Main Application Entry Point
//!
//! This is an HTTP server that underwrites small real-estate deals. A client uploads a rent roll
//! workbook with the loan and property parameters; the service computes NOI, debt service,
//! cash-on-cash return and cap rate, writes them into a prebuilt template and sends it back.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Spreadsheets**: umya-spreadsheet (xlsx read/write, in memory)
//! - **Access**: shared password compared as SHA-256 digests
//! - **Format**: multipart requests, xlsx or JSON responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Check that the template exists
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;
mod workbook;

use tracing_subscriber::EnvFilter;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use state::AppState;
use tower_http::trace::TraceLayer;

/// Assemble the router: public health check plus the gated underwriting routes.
fn build_app(state: AppState) -> Router {
    let gated_routes = Router::new()
        .route(
            "/api/v1/underwriting",
            post(handlers::underwriting::download_underwriting),
        )
        .route(
            "/api/v1/underwriting/summary",
            post(handlers::underwriting::underwriting_summary),
        )
        // Apply the password gate to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::password_gate,
        ));

    Router::new()
        // Public routes (no password required)
        .route("/health", get(handlers::health::health_check))
        .merge(gated_routes)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    if config.template_path.is_file() {
        tracing::info!(path = %config.template_path.display(), "Template found");
    } else {
        tracing::warn!(
            path = %config.template_path.display(),
            "Template not found, underwriting downloads will fail until it is provided"
        );
    }

    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = build_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
