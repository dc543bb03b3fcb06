//! Underwriting domain errors
//!
//! All errors here are terminal for a single quote request. The engine
//! performs no I/O, so failures are deterministic given the same input and
//! catalog snapshot; callers decide whether to correct the input or escalate
//! to a human underwriter.

use thiserror::Error;

use crate::quote::QuoteInvariant;

/// Errors that can occur while pricing an assessment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnderwritingError {
    /// Malformed assessment input, rejected before matching is attempted
    #[error("Invalid assessment input: {reason}")]
    InvalidInput { reason: String },

    /// No rule matched and no per-crop template exists
    ///
    /// The caller must reject the quote request rather than substitute
    /// defaults silently.
    #[error("No pricing rule or template for crop '{crop_type}'")]
    TemplateNotFound { crop_type: String },

    /// A computed quote violates a numeric invariant
    ///
    /// This indicates a misconfigured rule or template and is surfaced to
    /// the catalog owner; values are never silently clamped.
    #[error("Computed quote violates invariant: {invariant}")]
    InvalidQuote { invariant: QuoteInvariant },
}

impl UnderwritingError {
    /// Creates an invalid-input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        UnderwritingError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while constructing a catalog snapshot
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to parse a catalog document
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// A rule carries misconfigured calculations or conditions
    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },

    /// A template carries misconfigured base values
    #[error("Invalid template for crop '{crop_type}': {reason}")]
    InvalidTemplate { crop_type: String, reason: String },

    /// Two templates claim the same crop
    #[error("Duplicate template for crop '{0}'")]
    DuplicateTemplate(String),
}
