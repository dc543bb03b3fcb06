//! Business rules: conditional pricing policies matched against farm attributes
//!
//! A rule is a conjunction of constraints over crop type, risk tier, farm
//! size, and location, paired with the base rates to apply when it governs a
//! quote. All pricing policy lives in rule data; the calculator carries no
//! crop- or size-specific branches.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, RuleId};

use crate::assessment::{AssessmentInput, RiskLevel};
use crate::error::CatalogError;

/// Wildcard token admitted by crop and location selectors
pub const WILDCARD: &str = "all";

/// A set of admitted values where the literal `"all"` matches anything
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(Vec<String>);

impl Selector {
    /// Creates a selector admitting only the given values
    pub fn of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    /// Creates the wildcard selector
    pub fn any() -> Self {
        Self(vec![WILDCARD.to_string()])
    }

    /// Returns true if this selector admits every value
    pub fn is_wildcard(&self) -> bool {
        self.0.iter().any(|v| v == WILDCARD)
    }

    /// Returns true if the selector admits the given value
    pub fn matches(&self, value: &str) -> bool {
        self.is_wildcard() || self.0.iter().any(|v| v == value)
    }

    /// The admitted values as listed in the catalog
    pub fn values(&self) -> &[String] {
        &self.0
    }
}

/// Inclusive farm-size bounds in hectares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FarmSizeRange {
    pub min_hectares: Decimal,
    pub max_hectares: Decimal,
}

impl FarmSizeRange {
    pub fn new(min_hectares: Decimal, max_hectares: Decimal) -> Self {
        Self {
            min_hectares,
            max_hectares,
        }
    }

    /// Returns true if the size lies within `[min, max]`
    pub fn contains(&self, hectares: Decimal) -> bool {
        hectares >= self.min_hectares && hectares <= self.max_hectares
    }

    fn validate(&self) -> Result<(), String> {
        if self.min_hectares.is_sign_negative() {
            return Err(format!("Negative minimum farm size {}", self.min_hectares));
        }
        if self.min_hectares > self.max_hectares {
            return Err(format!(
                "Farm size range inverted: [{}, {}]",
                self.min_hectares, self.max_hectares
            ));
        }
        Ok(())
    }
}

/// The conjunction of constraints a rule places on an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConditions {
    /// Crops the rule applies to, or the wildcard
    pub crop_types: Selector,
    /// Risk tiers the rule applies to
    pub risk_levels: Vec<RiskLevel>,
    /// Inclusive hectare bounds; absent means any size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_size_range: Option<FarmSizeRange>,
    /// Regions the rule applies to, or the wildcard
    pub locations: Selector,
}

impl RuleConditions {
    /// Returns true if every constraint admits the assessment
    pub fn matches(&self, input: &AssessmentInput) -> bool {
        self.crop_types.matches(&input.crop_type)
            && self.risk_levels.contains(&input.risk_level)
            && self
                .farm_size_range
                .map_or(true, |range| range.contains(input.farm_size_hectares))
            && self.locations.matches(&input.location)
    }

    /// Number of constrained (non-wildcard) condition fields
    ///
    /// Used to break ties between rules without an explicit priority:
    /// fewer wildcard fields wins.
    pub fn specificity(&self) -> u8 {
        let mut score = 0;
        if !self.crop_types.is_wildcard() {
            score += 1;
        }
        if self.risk_levels.len() < RiskLevel::ALL.len() {
            score += 1;
        }
        if self.farm_size_range.is_some() {
            score += 1;
        }
        if !self.locations.is_wildcard() {
            score += 1;
        }
        score
    }
}

/// Base rates applied when a rule governs a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCalculations {
    /// Coverage per hectare, in the policy currency
    pub coverage_rate_per_hectare: Money,
    /// Premium as a percentage of total coverage, in [0, 100]
    pub premium_rate_percent: Decimal,
    /// Cover duration in days, strictly positive
    pub duration_days: i64,
    /// Deductible as a percentage of total coverage, in [0, 100]
    pub deductible_percent: Decimal,
}

impl RuleCalculations {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.coverage_rate_per_hectare.is_negative() {
            return Err(format!(
                "Negative coverage rate {}",
                self.coverage_rate_per_hectare
            ));
        }
        validate_percent("premium_rate_percent", self.premium_rate_percent)?;
        validate_percent("deductible_percent", self.deductible_percent)?;
        if self.duration_days <= 0 {
            return Err(format!("Duration must be positive, got {} days", self.duration_days));
        }
        Ok(())
    }
}

pub(crate) fn validate_percent(field: &str, value: Decimal) -> Result<(), String> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err(format!("{} must lie in [0, 100], got {}", field, value));
    }
    Ok(())
}

/// Whether a rule participates in matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Active,
    Inactive,
}

/// A conditional pricing policy in the rule catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRule {
    pub id: RuleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub conditions: RuleConditions,
    pub calculations: RuleCalculations,
    pub status: RuleStatus,
    /// Explicit precedence; lower value wins. Rules without one order by
    /// specificity then catalog insertion order, after all prioritised rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl BusinessRule {
    /// Returns true if the rule is active and all conditions admit the input
    pub fn matches(&self, input: &AssessmentInput) -> bool {
        self.status == RuleStatus::Active && self.conditions.matches(input)
    }

    /// Tie-break score; see [`RuleConditions::specificity`]
    pub fn specificity(&self) -> u8 {
        self.conditions.specificity()
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidRule {
            rule: self.name.clone(),
            reason,
        };
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidRule {
                rule: self.id.to_string(),
                reason: "Rule name is empty".to_string(),
            });
        }
        if self.conditions.risk_levels.is_empty() {
            return Err(invalid("Rule admits no risk tiers".to_string()));
        }
        if let Some(range) = self.conditions.farm_size_range {
            range.validate().map_err(invalid)?;
        }
        self.calculations.validate().map_err(invalid)?;
        Ok(())
    }
}
