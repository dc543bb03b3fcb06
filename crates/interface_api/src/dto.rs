//! Request/response data transfer objects

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_underwriting::{BusinessRule, PolicyQuote, RuleStatus};

/// Quote request body, mirroring the Risk Assessment Service's output
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 1, message = "crop_type must not be empty"))]
    pub crop_type: String,
    pub farm_size_hectares: Decimal,
    /// One of "low", "medium", "high"
    #[validate(length(min = 1, message = "risk_level must not be empty"))]
    pub risk_level: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
}

/// A priced quote, handed on to the Policy & Payment Service
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote_id: String,
    pub currency: String,
    pub coverage_rate_per_hectare: Decimal,
    pub total_coverage: Decimal,
    pub premium_rate_percent: Decimal,
    pub premium_amount: Decimal,
    pub deductible_percent: Decimal,
    pub deductible_amount: Decimal,
    pub duration_days: i64,
    pub effective_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    /// Audit basis: governing rule id or `template:<crop>`
    pub source: String,
    pub catalog_version: String,
}

impl From<PolicyQuote> for QuoteResponse {
    fn from(quote: PolicyQuote) -> Self {
        Self {
            quote_id: quote.id.to_string(),
            currency: quote.total_coverage.currency().to_string(),
            coverage_rate_per_hectare: quote.coverage_rate_per_hectare.amount(),
            total_coverage: quote.total_coverage.amount(),
            premium_rate_percent: quote.premium_rate_percent,
            premium_amount: quote.premium_amount.amount(),
            deductible_percent: quote.deductible_percent,
            deductible_amount: quote.deductible_amount.amount(),
            duration_days: quote.duration_days,
            effective_date: quote.period.effective,
            expiry_date: quote.period.expiry,
            source: quote.source.to_string(),
            catalog_version: quote.catalog_version.to_string(),
        }
    }
}

/// Summary of a catalog rule for operational inspection
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleSummary {
    pub id: String,
    pub name: String,
    pub status: String,
    pub priority: Option<i32>,
    pub specificity: u8,
    pub crop_types: Vec<String>,
    pub risk_levels: Vec<String>,
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size_min_hectares: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size_max_hectares: Option<Decimal>,
}

impl From<&BusinessRule> for RuleSummary {
    fn from(rule: &BusinessRule) -> Self {
        Self {
            id: rule.id.to_string(),
            name: rule.name.clone(),
            status: match rule.status {
                RuleStatus::Active => "active".to_string(),
                RuleStatus::Inactive => "inactive".to_string(),
            },
            priority: rule.priority,
            specificity: rule.specificity(),
            crop_types: rule.conditions.crop_types.values().to_vec(),
            risk_levels: rule
                .conditions
                .risk_levels
                .iter()
                .map(|r| r.to_string())
                .collect(),
            locations: rule.conditions.locations.values().to_vec(),
            farm_size_min_hectares: rule.conditions.farm_size_range.map(|r| r.min_hectares),
            farm_size_max_hectares: rule.conditions.farm_size_range.map(|r| r.max_hectares),
        }
    }
}

/// Result of a catalog reload
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub catalog_version: String,
    pub active_rules: usize,
    pub templates: usize,
}
