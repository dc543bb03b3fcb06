//! Policy Underwriting Domain
//!
//! This crate implements the agricultural policy underwriting rule engine:
//! given a farm's crop type, size, risk classification, and location, it
//! selects an applicable pricing rule (or the crop's template default) and
//! derives a validated insurance quote.
//!
//! # Architecture
//!
//! Three cooperating parts, each a pure function of its inputs:
//! - **Rule Catalog**: immutable, versioned snapshot of business rules and
//!   per-crop templates, with the evaluation order fixed at construction
//! - **Rule Matcher**: first-match selection over the catalog's evaluation
//!   order, falling back to the crop template
//! - **Quote Calculator**: risk-tier adjustments, numeric derivation, and
//!   invariant validation
//!
//! No state is retained between calls; concurrent invocations against the
//! same snapshot need no synchronization.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_underwriting::{AssessmentInput, QuoteService, RiskLevel, RuleCatalog};
//!
//! let catalog = RuleCatalog::from_json_str(&rules_json)?;
//! let service = QuoteService::new(Arc::new(catalog));
//!
//! let input = AssessmentInput::new("maize", dec!(2.0), RiskLevel::Low, "Eastern");
//! let quote = service.quote(&input)?;
//! println!("{} premium {}", quote.source, quote.premium_amount);
//! ```

pub mod assessment;
pub mod catalog;
pub mod error;
pub mod matcher;
pub mod quote;
pub mod rule;
pub mod services;

pub use assessment::{AssessmentInput, RiskLevel};
pub use catalog::{PolicyTemplate, RuleCatalog, RuleCatalogBuilder};
pub use error::{CatalogError, UnderwritingError};
pub use matcher::{match_assessment, MatchResult};
pub use quote::{
    PolicyQuote, QuoteCalculator, QuoteInvariant, QuoteSource, DEFAULT_DEDUCTIBLE_PERCENT,
};
pub use rule::{
    BusinessRule, FarmSizeRange, RuleCalculations, RuleConditions, RuleStatus, Selector,
};
pub use services::QuoteService;
