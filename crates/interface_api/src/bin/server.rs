//! Underwriting Engine - API Server Binary
//!
//! This binary starts the HTTP API server for the agricultural underwriting
//! engine.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin underwriting-api
//!
//! # Run with environment variables
//! UW_HOST=0.0.0.0 UW_PORT=8080 UW_RULES_FILE=config/rules.json cargo run --bin underwriting-api
//! ```
//!
//! # Environment Variables
//!
//! * `UW_HOST` - Server host (default: 0.0.0.0)
//! * `UW_PORT` - Server port (default: 8080)
//! * `UW_RULES_FILE` - Path to the rule catalog JSON document
//! * `UW_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_underwriting::RuleCatalog;
use interface_api::{config::ApiConfig, create_router, state::CatalogHandle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        rules_file = %config.rules_file,
        "Starting underwriting engine API server"
    );

    let catalog = load_catalog(&config.rules_file)?;
    tracing::info!(
        catalog_version = %catalog.version(),
        active_rules = catalog.active_rules().count(),
        templates = catalog.template_count(),
        "Rule catalog loaded"
    );

    let app = create_router(CatalogHandle::new(catalog), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables, falling back to
/// individual variables and then defaults
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("UW_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("UW_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        rules_file: std::env::var("UW_RULES_FILE")
            .unwrap_or_else(|_| "config/rules.json".to_string()),
        log_level: std::env::var("UW_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Reads and validates the rule catalog document
///
/// A catalog that fails to parse or validate aborts startup; serving quotes
/// from a partial rule set is worse than not serving at all.
fn load_catalog(path: &str) -> anyhow::Result<RuleCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read rules file '{}'", path))?;
    RuleCatalog::from_json_str(&json)
        .with_context(|| format!("Rules file '{}' is not a valid catalog", path))
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
