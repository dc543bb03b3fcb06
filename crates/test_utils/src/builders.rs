//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use core_kernel::{Currency, Money, RuleId};
use domain_underwriting::{
    AssessmentInput, BusinessRule, FarmSizeRange, PolicyTemplate, RiskLevel, RuleCalculations,
    RuleConditions, RuleStatus, Selector,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for assessment inputs
///
/// Defaults to a two-hectare low-risk maize farm in the central region,
/// matching the standard catalog fixtures.
pub struct AssessmentInputBuilder {
    crop_type: String,
    farm_size_hectares: Decimal,
    risk_level: RiskLevel,
    location: String,
}

impl Default for AssessmentInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentInputBuilder {
    pub fn new() -> Self {
        Self {
            crop_type: "maize".to_string(),
            farm_size_hectares: dec!(2.0),
            risk_level: RiskLevel::Low,
            location: "central".to_string(),
        }
    }

    pub fn with_crop_type(mut self, crop_type: impl Into<String>) -> Self {
        self.crop_type = crop_type.into();
        self
    }

    pub fn with_farm_size(mut self, hectares: Decimal) -> Self {
        self.farm_size_hectares = hectares;
        self
    }

    pub fn with_risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = risk_level;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn build(self) -> AssessmentInput {
        AssessmentInput::new(
            self.crop_type,
            self.farm_size_hectares,
            self.risk_level,
            self.location,
        )
    }
}

/// Builder for business rules
///
/// Defaults to an active maize rule covering all risk levels and locations
/// with the standard maize rates.
pub struct BusinessRuleBuilder {
    id: RuleId,
    name: String,
    description: String,
    crop_types: Selector,
    risk_levels: Vec<RiskLevel>,
    farm_size_range: Option<FarmSizeRange>,
    locations: Selector,
    coverage_rate: Money,
    premium_rate_percent: Decimal,
    duration_days: i64,
    deductible_percent: Decimal,
    status: RuleStatus,
    priority: Option<i32>,
}

impl Default for BusinessRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessRuleBuilder {
    pub fn new() -> Self {
        Self {
            id: RuleId::new(),
            name: "Test rule".to_string(),
            description: String::new(),
            crop_types: Selector::of(["maize"]),
            risk_levels: RiskLevel::ALL.to_vec(),
            farm_size_range: None,
            locations: Selector::any(),
            coverage_rate: Money::new(dec!(480000), Currency::UGX),
            premium_rate_percent: dec!(8),
            duration_days: 120,
            deductible_percent: dec!(5),
            status: RuleStatus::Active,
            priority: None,
        }
    }

    pub fn with_id(mut self, id: RuleId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_crop_types<I, S>(mut self, crops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.crop_types = Selector::of(crops);
        self
    }

    pub fn wildcard_crops(mut self) -> Self {
        self.crop_types = Selector::any();
        self
    }

    pub fn with_risk_levels(mut self, levels: impl Into<Vec<RiskLevel>>) -> Self {
        self.risk_levels = levels.into();
        self
    }

    pub fn with_farm_size_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.farm_size_range = Some(FarmSizeRange::new(min, max));
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = Selector::of(locations);
        self
    }

    pub fn wildcard_locations(mut self) -> Self {
        self.locations = Selector::any();
        self
    }

    pub fn with_coverage_rate(mut self, rate: Money) -> Self {
        self.coverage_rate = rate;
        self
    }

    pub fn with_premium_rate(mut self, percent: Decimal) -> Self {
        self.premium_rate_percent = percent;
        self
    }

    pub fn with_duration_days(mut self, days: i64) -> Self {
        self.duration_days = days;
        self
    }

    pub fn with_deductible(mut self, percent: Decimal) -> Self {
        self.deductible_percent = percent;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.status = RuleStatus::Inactive;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn build(self) -> BusinessRule {
        BusinessRule {
            id: self.id,
            name: self.name,
            description: self.description,
            conditions: RuleConditions {
                crop_types: self.crop_types,
                risk_levels: self.risk_levels,
                farm_size_range: self.farm_size_range,
                locations: self.locations,
            },
            calculations: RuleCalculations {
                coverage_rate_per_hectare: self.coverage_rate,
                premium_rate_percent: self.premium_rate_percent,
                duration_days: self.duration_days,
                deductible_percent: self.deductible_percent,
            },
            status: self.status,
            priority: self.priority,
        }
    }
}

/// Builder for policy templates
///
/// Defaults to the standard maize template.
pub struct PolicyTemplateBuilder {
    crop_type: String,
    base_coverage_rate: Money,
    base_premium_rate: Decimal,
    standard_duration_days: i64,
}

impl Default for PolicyTemplateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyTemplateBuilder {
    pub fn new() -> Self {
        Self {
            crop_type: "maize".to_string(),
            base_coverage_rate: Money::new(dec!(480000), Currency::UGX),
            base_premium_rate: dec!(8),
            standard_duration_days: 120,
        }
    }

    pub fn with_crop_type(mut self, crop_type: impl Into<String>) -> Self {
        self.crop_type = crop_type.into();
        self
    }

    pub fn with_base_coverage_rate(mut self, rate: Money) -> Self {
        self.base_coverage_rate = rate;
        self
    }

    pub fn with_base_premium_rate(mut self, percent: Decimal) -> Self {
        self.base_premium_rate = percent;
        self
    }

    pub fn with_standard_duration(mut self, days: i64) -> Self {
        self.standard_duration_days = days;
        self
    }

    pub fn build(self) -> PolicyTemplate {
        PolicyTemplate {
            crop_type: self.crop_type,
            base_coverage_rate: self.base_coverage_rate,
            base_premium_rate: self.base_premium_rate,
            standard_duration_days: self.standard_duration_days,
        }
    }
}
