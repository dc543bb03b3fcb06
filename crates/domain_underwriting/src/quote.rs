//! Quote calculation
//!
//! Turns a match result plus an assessment into a validated `PolicyQuote`.
//! Base values come from the governing rule (or template), risk-tier
//! adjustments apply in a fixed order (coverage rate first, then premium
//! rate), and every numeric invariant is re-checked on the finished quote.
//! Violations surface as errors naming the invariant; values are never
//! silently clamped.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{CatalogVersion, CoverPeriod, Money, QuoteId, Rate, RuleId};

use crate::assessment::{AssessmentInput, RiskLevel};
use crate::catalog::PolicyTemplate;
use crate::error::UnderwritingError;
use crate::matcher::MatchResult;
use crate::rule::BusinessRule;

/// Deductible applied to template-based quotes, as a percent of coverage
pub const DEFAULT_DEDUCTIBLE_PERCENT: Decimal = dec!(5);

/// The rule or template a quote was priced from, recorded for audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSource {
    Rule(RuleId),
    Template { crop_type: String },
}

impl fmt::Display for QuoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteSource::Rule(id) => write!(f, "{}", id),
            QuoteSource::Template { crop_type } => write!(f, "template:{}", crop_type),
        }
    }
}

/// A numeric invariant every produced quote must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteInvariant {
    /// `total_coverage >= 0`
    NonNegativeCoverage,
    /// `0 <= premium_amount <= total_coverage`
    PremiumWithinCoverage,
    /// `0 <= deductible_amount <= total_coverage`
    DeductibleWithinCoverage,
    /// `duration_days > 0` and `expiry > effective`
    PositiveDuration,
}

impl fmt::Display for QuoteInvariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuoteInvariant::NonNegativeCoverage => "total coverage must be non-negative",
            QuoteInvariant::PremiumWithinCoverage => {
                "premium must lie between zero and total coverage"
            }
            QuoteInvariant::DeductibleWithinCoverage => {
                "deductible must lie between zero and total coverage"
            }
            QuoteInvariant::PositiveDuration => {
                "cover duration must be positive and expiry after effective"
            }
        };
        write!(f, "{}", s)
    }
}

/// The computed, unpersisted pricing result for a single assessment
///
/// Ephemeral by design: handed to the external Policy & Payment Service,
/// which owns persistence and the policy lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyQuote {
    pub id: QuoteId,
    /// Per-hectare coverage rate after risk adjustment
    pub coverage_rate_per_hectare: Money,
    pub total_coverage: Money,
    /// Premium rate after risk adjustment, percent of total coverage
    pub premium_rate_percent: Decimal,
    pub premium_amount: Money,
    pub deductible_percent: Decimal,
    pub deductible_amount: Money,
    pub duration_days: i64,
    pub period: CoverPeriod,
    /// Audit basis: the governing rule id or `template:<crop>`
    pub source: QuoteSource,
    /// The catalog snapshot the quote was priced against
    pub catalog_version: CatalogVersion,
}

/// Base values selected by the matcher, before risk adjustment
struct QuoteBasis {
    coverage_rate: Money,
    premium_rate_percent: Decimal,
    duration_days: i64,
    deductible_percent: Decimal,
    source: QuoteSource,
}

impl QuoteBasis {
    fn from_rule(rule: &BusinessRule) -> Self {
        Self {
            coverage_rate: rule.calculations.coverage_rate_per_hectare,
            premium_rate_percent: rule.calculations.premium_rate_percent,
            duration_days: rule.calculations.duration_days,
            deductible_percent: rule.calculations.deductible_percent,
            source: QuoteSource::Rule(rule.id),
        }
    }

    fn from_template(template: &PolicyTemplate) -> Self {
        Self {
            coverage_rate: template.base_coverage_rate,
            premium_rate_percent: template.base_premium_rate,
            duration_days: template.standard_duration_days,
            deductible_percent: DEFAULT_DEDUCTIBLE_PERCENT,
            source: QuoteSource::Template {
                crop_type: template.crop_type.clone(),
            },
        }
    }

    /// Multiplicative risk-tier adjustment; coverage rate first, premium second
    fn apply_risk_adjustment(&mut self, risk_level: RiskLevel) {
        match risk_level {
            RiskLevel::High => {
                self.coverage_rate = self.coverage_rate.multiply(dec!(0.90));
                self.premium_rate_percent *= dec!(1.50);
            }
            RiskLevel::Low => {
                self.premium_rate_percent *= dec!(0.80);
            }
            RiskLevel::Medium => {}
        }
    }
}

/// Derives validated quotes from match results
///
/// Stateless; farm-size discounting is expressed purely through rule
/// conditions, so there is no size branch here.
pub struct QuoteCalculator;

impl QuoteCalculator {
    /// Computes a quote effective at the given instant
    ///
    /// # Errors
    ///
    /// - `TemplateNotFound` if the match result is `NoMatch`
    /// - `InvalidQuote` naming the violated invariant for misconfigured
    ///   rules or templates
    pub fn calculate(
        result: &MatchResult<'_>,
        input: &AssessmentInput,
        effective: DateTime<Utc>,
        catalog_version: CatalogVersion,
    ) -> Result<PolicyQuote, UnderwritingError> {
        let mut basis = match result {
            MatchResult::Rule(rule) => QuoteBasis::from_rule(rule),
            MatchResult::TemplateDefault(template) => QuoteBasis::from_template(template),
            MatchResult::NoMatch => {
                return Err(UnderwritingError::TemplateNotFound {
                    crop_type: input.crop_type.clone(),
                })
            }
        };

        basis.apply_risk_adjustment(input.risk_level);

        let total_coverage = basis
            .coverage_rate
            .multiply(input.farm_size_hectares)
            .round_to_currency();
        let premium_amount = Rate::from_percentage(basis.premium_rate_percent)
            .apply(&total_coverage)
            .round_to_currency();
        let deductible_amount = Rate::from_percentage(basis.deductible_percent)
            .apply(&total_coverage)
            .round_to_currency();

        let period = CoverPeriod::from_duration_days(effective, basis.duration_days)
            .map_err(|_| UnderwritingError::InvalidQuote {
                invariant: QuoteInvariant::PositiveDuration,
            })?;

        let quote = PolicyQuote {
            id: QuoteId::new_v7(),
            coverage_rate_per_hectare: basis.coverage_rate,
            total_coverage,
            premium_rate_percent: basis.premium_rate_percent,
            premium_amount,
            deductible_percent: basis.deductible_percent,
            deductible_amount,
            duration_days: basis.duration_days,
            period,
            source: basis.source,
            catalog_version,
        };

        quote.validate()?;
        Ok(quote)
    }
}

impl PolicyQuote {
    /// Checks every numeric invariant, returning the first violation
    pub fn validate(&self) -> Result<(), UnderwritingError> {
        let violated = |invariant| Err(UnderwritingError::InvalidQuote { invariant });

        if self.total_coverage.is_negative() {
            return violated(QuoteInvariant::NonNegativeCoverage);
        }
        if self.premium_amount.is_negative()
            || self.premium_amount.amount() > self.total_coverage.amount()
        {
            return violated(QuoteInvariant::PremiumWithinCoverage);
        }
        if self.deductible_amount.is_negative()
            || self.deductible_amount.amount() > self.total_coverage.amount()
        {
            return violated(QuoteInvariant::DeductibleWithinCoverage);
        }
        if self.duration_days <= 0 || self.period.expiry <= self.period.effective {
            return violated(QuoteInvariant::PositiveDuration);
        }
        Ok(())
    }
}
