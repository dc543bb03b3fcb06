//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the underwriting engine. These
//! fixtures are designed to be consistent and predictable for unit and
//! integration tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Currency, Money};
use domain_underwriting::{AssessmentInput, RiskLevel, RuleCatalog};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use crate::builders::{AssessmentInputBuilder, BusinessRuleBuilder, PolicyTemplateBuilder};

/// Fixture for assessment inputs
pub struct AssessmentFixtures;

impl AssessmentFixtures {
    /// A two-hectare maize smallholding in the central region, low risk
    pub fn maize_smallholder() -> AssessmentInput {
        AssessmentInputBuilder::new().build()
    }

    /// A medium-risk coffee farm in the western highlands
    pub fn coffee_western() -> AssessmentInput {
        AssessmentInputBuilder::new()
            .with_crop_type("coffee")
            .with_farm_size(dec!(4.5))
            .with_risk_level(RiskLevel::Medium)
            .with_location("western")
            .build()
    }

    /// A high-risk beans plot, for adjustment tests
    pub fn beans_high_risk() -> AssessmentInput {
        AssessmentInputBuilder::new()
            .with_crop_type("beans")
            .with_farm_size(dec!(1))
            .with_risk_level(RiskLevel::High)
            .build()
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard cover effective date (Mar 1, 2025 - first planting season)
    pub fn effective() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
    }

    /// Mid-season timestamp for containment tests
    pub fn mid_season() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 15, 12, 0, 0).unwrap()
    }

    /// Pre-season timestamp
    pub fn before_season() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }
}

/// Fixture for money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The standard maize coverage rate per hectare
    pub fn maize_rate() -> Money {
        Money::new(dec!(480000), Currency::UGX)
    }

    /// A coverage rate that produces fractional shillings before rounding
    pub fn odd_rate() -> Money {
        Money::new(dec!(333333), Currency::UGX)
    }

    /// A zero amount in the policy currency
    pub fn zero() -> Money {
        Money::zero(Currency::UGX)
    }
}

/// Fixture for complete rule catalogs
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// A small but representative catalog: one prioritised maize rule, one
    /// wildcard fallback rule, and templates for maize and coffee
    pub fn standard() -> RuleCatalog {
        RuleCatalog::builder()
            .rule(
                BusinessRuleBuilder::new()
                    .with_name("Maize standard cover")
                    .with_crop_types(["maize"])
                    .with_priority(10)
                    .build(),
            )
            .rule(
                BusinessRuleBuilder::new()
                    .with_name("Any-crop fallback")
                    .wildcard_crops()
                    .wildcard_locations()
                    .with_coverage_rate(Money::new(dec!(300000), Currency::UGX))
                    .with_premium_rate(dec!(10))
                    .build(),
            )
            .template(PolicyTemplateBuilder::new().build())
            .template(
                PolicyTemplateBuilder::new()
                    .with_crop_type("coffee")
                    .with_base_coverage_rate(Money::new(dec!(900000), Currency::UGX))
                    .with_base_premium_rate(dec!(12))
                    .build(),
            )
            .build()
            .unwrap()
    }

    /// A catalog with templates only, for fallback tests
    pub fn templates_only() -> RuleCatalog {
        RuleCatalog::builder()
            .template(PolicyTemplateBuilder::new().build())
            .build()
            .unwrap()
    }

    /// A serialized catalog document matching [`CatalogFixtures::standard`],
    /// for wire-level and reload tests
    pub fn standard_json() -> &'static str {
        static DOCUMENT: Lazy<String> = Lazy::new(|| {
            serde_json::json!({
            "rules": [
                {
                    "id": "11111111-1111-7111-8111-111111111111",
                    "name": "Maize standard cover",
                    "conditions": {
                        "crop_types": ["maize"],
                        "risk_levels": ["low", "medium", "high"],
                        "locations": ["all"]
                    },
                    "calculations": {
                        "coverage_rate_per_hectare": { "amount": "480000", "currency": "UGX" },
                        "premium_rate_percent": "8",
                        "duration_days": 120,
                        "deductible_percent": "5"
                    },
                    "status": "active",
                    "priority": 10
                }
            ],
            "templates": [
                {
                    "crop_type": "maize",
                    "base_coverage_rate": { "amount": "480000", "currency": "UGX" },
                    "base_premium_rate": "8",
                    "standard_duration_days": 120
                },
                {
                    "crop_type": "coffee",
                    "base_coverage_rate": { "amount": "900000", "currency": "UGX" },
                    "base_premium_rate": "12",
                    "standard_duration_days": 180
                }
            ]
        })
            .to_string()
        });
        &DOCUMENT
    }
}
