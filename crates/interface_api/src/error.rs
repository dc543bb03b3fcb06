//! API error handling
//!
//! Pricing errors are audit relevant, so every response body carries the
//! specific invariant or missing-data reason rather than a generic failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_underwriting::{CatalogError, UnderwritingError};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// No rule or template can price this crop/configuration
    #[error("Cannot price: {0}")]
    CannotPrice(String),

    /// The rule catalog is misconfigured; surfaced to the catalog owner
    #[error("Catalog configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
            ApiError::CannotPrice(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "cannot_price", msg.clone())
            }
            ApiError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "configuration_error",
                msg.clone(),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<UnderwritingError> for ApiError {
    fn from(err: UnderwritingError) -> Self {
        match &err {
            UnderwritingError::InvalidInput { .. } => ApiError::Validation(err.to_string()),
            UnderwritingError::TemplateNotFound { .. } => ApiError::CannotPrice(err.to_string()),
            UnderwritingError::InvalidQuote { .. } => ApiError::Configuration(err.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
