//! HTTP API Layer
//!
//! This crate provides the REST API for the underwriting engine using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: quote pricing, catalog inspection/reload, health
//! - **DTOs**: request/response data transfer objects
//! - **Error Handling**: consistent error responses carrying the specific
//!   pricing failure reason
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, state::CatalogHandle, config::ApiConfig};
//!
//! let catalog = CatalogHandle::new(RuleCatalog::from_json_str(&json)?);
//! let app = create_router(catalog, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, quote, rules};
use crate::state::CatalogHandle;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogHandle,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `catalog` - Handle to the current rule catalog snapshot
/// * `config` - API configuration
pub fn create_router(catalog: CatalogHandle, config: ApiConfig) -> Router {
    let state = AppState { catalog, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route("/quote", post(quote::create_quote))
        .route("/rules", get(rules::list_rules))
        .route("/rules/reload", post(rules::reload_rules));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
