//! Quote handler

use axum::{extract::State, Json};
use validator::Validate;

use domain_underwriting::{AssessmentInput, QuoteService, RiskLevel};

use crate::dto::{QuoteRequest, QuoteResponse};
use crate::error::ApiError;
use crate::AppState;

/// Prices an assessment and returns the resulting quote
///
/// The whole request runs against one catalog snapshot; the quote is
/// ephemeral and owned by the caller from here on.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request.validate()?;

    let risk_level: RiskLevel = request.risk_level.parse().map_err(ApiError::from)?;
    let input = AssessmentInput::new(
        request.crop_type,
        request.farm_size_hectares,
        risk_level,
        request.location,
    );

    let service = QuoteService::new(state.catalog.snapshot());
    let quote = service.quote(&input)?;

    Ok(Json(QuoteResponse::from(quote)))
}
