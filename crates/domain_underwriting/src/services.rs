//! Underwriting domain services
//!
//! `QuoteService` ties validation, matching, and calculation together
//! against one catalog snapshot. Each call is a pure function of its input
//! and the snapshot captured at construction; the service retains no state
//! between calls and is safe under concurrent invocation.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::assessment::AssessmentInput;
use crate::catalog::RuleCatalog;
use crate::error::UnderwritingError;
use crate::matcher::match_assessment;
use crate::quote::{PolicyQuote, QuoteCalculator};

/// Prices assessments against a fixed catalog snapshot
#[derive(Clone)]
pub struct QuoteService {
    catalog: Arc<RuleCatalog>,
}

impl QuoteService {
    /// Creates a service bound to the given snapshot
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    /// The snapshot this service prices against
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Prices an assessment, effective now
    ///
    /// # Errors
    ///
    /// `InvalidInput` for malformed assessments, `TemplateNotFound` when the
    /// crop cannot be priced, `InvalidQuote` for catalog misconfiguration
    pub fn quote(&self, input: &AssessmentInput) -> Result<PolicyQuote, UnderwritingError> {
        self.quote_at(input, Utc::now())
    }

    /// Prices an assessment effective at an explicit instant
    ///
    /// Deterministic given the snapshot: repeated calls with the same input
    /// and instant produce the same numeric fields and audit source.
    pub fn quote_at(
        &self,
        input: &AssessmentInput,
        effective: DateTime<Utc>,
    ) -> Result<PolicyQuote, UnderwritingError> {
        input.validate()?;

        let matched = match_assessment(&self.catalog, input);
        let quote =
            QuoteCalculator::calculate(&matched, input, effective, self.catalog.version());

        match &quote {
            Ok(q) => {
                tracing::info!(
                    quote_id = %q.id,
                    source = %q.source,
                    crop = %input.crop_type,
                    risk = %input.risk_level,
                    total_coverage = %q.total_coverage,
                    premium = %q.premium_amount,
                    "Quote issued"
                );
            }
            Err(UnderwritingError::InvalidQuote { invariant }) => {
                tracing::warn!(
                    crop = %input.crop_type,
                    %invariant,
                    "Catalog configuration produced an invalid quote"
                );
            }
            Err(_) => {}
        }

        quote
    }
}
