//! Property-Based Test Data Generators
//!
//! Proptest strategies for the underwriting domain, shared across the
//! workspace test suites.

use domain_underwriting::{AssessmentInput, RiskLevel};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy producing each risk tier
pub fn risk_level() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
    ]
}

/// Strategy producing positive farm sizes with up to two decimal places,
/// from garden plots to commercial estates
pub fn farm_size_hectares() -> impl Strategy<Value = Decimal> {
    (1i64..=500_000).prop_map(|centi_ha| Decimal::new(centi_ha, 2))
}

/// Strategy producing crop names drawn from the supported portfolio
pub fn crop_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("maize".to_string()),
        Just("coffee".to_string()),
        Just("beans".to_string()),
        Just("cassava".to_string()),
    ]
}

/// Strategy producing region identifiers
pub fn location() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("central".to_string()),
        Just("western".to_string()),
        Just("eastern".to_string()),
        Just("northern".to_string()),
    ]
}

/// Strategy producing structurally valid assessment inputs
pub fn assessment_input() -> impl Strategy<Value = AssessmentInput> {
    (crop_type(), farm_size_hectares(), risk_level(), location()).prop_map(
        |(crop, size, risk, loc)| AssessmentInput::new(crop, size, risk, loc),
    )
}
