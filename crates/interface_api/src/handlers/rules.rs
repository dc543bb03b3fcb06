//! Rule catalog inspection and reload handlers
//!
//! Rule authoring stays with an external administrative collaborator; this
//! surface only exposes the active rule set for operational visibility and
//! re-reads the catalog document that collaborator maintains.

use axum::{extract::State, Json};

use domain_underwriting::RuleCatalog;

use crate::dto::{ReloadResponse, RuleSummary};
use crate::error::ApiError;
use crate::AppState;

/// Lists active rules in their evaluation order
pub async fn list_rules(State(state): State<AppState>) -> Json<Vec<RuleSummary>> {
    let catalog = state.catalog.snapshot();
    let rules: Vec<RuleSummary> = catalog.active_rules().map(RuleSummary::from).collect();
    Json(rules)
}

/// Re-reads the rules file and atomically swaps the catalog snapshot
///
/// In-flight quote requests complete against the snapshot they started
/// with; only new requests see the reloaded catalog.
pub async fn reload_rules(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let path = state.config.rules_file.clone();
    let json = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ApiError::BadRequest(format!("Cannot read rules file '{}': {}", path, e)))?;

    let catalog = RuleCatalog::from_json_str(&json)?;
    let active_rules = catalog.active_rules().count();
    let templates = catalog.template_count();
    let version = state.catalog.swap(catalog);

    tracing::info!(
        catalog_version = %version,
        active_rules,
        templates,
        "Rule catalog reloaded"
    );

    Ok(Json(ReloadResponse {
        catalog_version: version.to_string(),
        active_rules,
        templates,
    }))
}
