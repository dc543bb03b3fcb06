//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub catalog_version: String,
    pub active_rules: usize,
    pub templates: usize,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check, reporting the loaded catalog snapshot
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let catalog = state.catalog.snapshot();

    Json(ReadinessResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_version: catalog.version().to_string(),
        active_rules: catalog.active_rules().count(),
        templates: catalog.template_count(),
    })
}
