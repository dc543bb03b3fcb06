//! End-to-end quote tests
//!
//! Exercises the full match+calculate path through `QuoteService`:
//! - Worked pricing scenarios (low/medium/high tiers)
//! - Rule precedence independent of catalog insertion order
//! - Template fallback and its audit source
//! - Error taxonomy for unpriceable and malformed inputs

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::Arc;

use core_kernel::{Currency, Money, RuleId};
use domain_underwriting::{
    AssessmentInput, BusinessRule, FarmSizeRange, PolicyTemplate, QuoteService, QuoteSource,
    RiskLevel, RuleCalculations, RuleCatalog, RuleConditions, RuleStatus, Selector,
    UnderwritingError, DEFAULT_DEDUCTIBLE_PERCENT,
};

fn ugx(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::UGX)
}

fn maize_rule() -> BusinessRule {
    BusinessRule {
        id: RuleId::new(),
        name: "Maize smallholder Eastern".to_string(),
        description: "Seasonal maize cover for smallholdings".to_string(),
        conditions: RuleConditions {
            crop_types: Selector::of(["maize"]),
            risk_levels: RiskLevel::ALL.to_vec(),
            farm_size_range: Some(FarmSizeRange::new(dec!(0.5), dec!(5.0))),
            locations: Selector::of(["Eastern"]),
        },
        calculations: RuleCalculations {
            coverage_rate_per_hectare: ugx(dec!(480000)),
            premium_rate_percent: dec!(8),
            duration_days: 120,
            deductible_percent: dec!(5),
        },
        status: RuleStatus::Active,
        priority: None,
    }
}

fn maize_template() -> PolicyTemplate {
    PolicyTemplate {
        crop_type: "maize".to_string(),
        base_coverage_rate: ugx(dec!(400000)),
        base_premium_rate: dec!(10),
        standard_duration_days: 180,
    }
}

fn service_with(rules: Vec<BusinessRule>, templates: Vec<PolicyTemplate>) -> QuoteService {
    let mut builder = RuleCatalog::builder();
    for rule in rules {
        builder = builder.rule(rule);
    }
    for template in templates {
        builder = builder.template(template);
    }
    QuoteService::new(Arc::new(builder.build().unwrap()))
}

mod pricing_scenarios {
    use super::*;

    /// Low-risk maize smallholding: premium rate discounted to 80% of base
    #[test]
    fn test_low_risk_two_hectares() {
        let svc = service_with(vec![maize_rule()], vec![]);
        let input = AssessmentInput::new("maize", dec!(2.0), RiskLevel::Low, "Eastern");
        let effective = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();

        let quote = svc.quote_at(&input, effective).unwrap();

        assert_eq!(quote.premium_rate_percent, dec!(6.4));
        assert_eq!(quote.total_coverage.amount(), dec!(960000));
        assert_eq!(quote.premium_amount.amount(), dec!(61440));
        assert_eq!(quote.deductible_amount.amount(), dec!(48000));
        assert_eq!(quote.period.duration_days(), 120);
        assert_eq!(
            quote.period.expiry,
            effective + chrono::Duration::days(120)
        );
    }

    /// High tier: coverage rate drops to 90% of base, premium rises to 150%
    #[test]
    fn test_high_risk_adjustments() {
        let mut rule = maize_rule();
        rule.calculations.coverage_rate_per_hectare = ugx(dec!(400000));
        rule.calculations.premium_rate_percent = dec!(10);
        let svc = service_with(vec![rule], vec![]);

        let input = AssessmentInput::new("maize", dec!(1.0), RiskLevel::High, "Eastern");
        let quote = svc.quote(&input).unwrap();

        assert_eq!(quote.coverage_rate_per_hectare.amount(), dec!(360000));
        assert_eq!(quote.premium_rate_percent, dec!(15));
        assert_eq!(quote.total_coverage.amount(), dec!(360000));
        assert_eq!(quote.premium_amount.amount(), dec!(54000));
    }

    /// Medium tier applies no adjustment in either direction
    #[test]
    fn test_medium_risk_unadjusted() {
        let svc = service_with(vec![maize_rule()], vec![]);
        let input = AssessmentInput::new("maize", dec!(3.0), RiskLevel::Medium, "Eastern");

        let quote = svc.quote(&input).unwrap();
        assert_eq!(quote.premium_rate_percent, dec!(8));
        assert_eq!(quote.coverage_rate_per_hectare.amount(), dec!(480000));
    }

    /// Large-farm discounts come from rules targeting large sizes, not from
    /// any branch in the calculator
    #[test]
    fn test_large_farm_discount_via_rule_conditions() {
        let mut large = maize_rule();
        large.name = "Maize estate".to_string();
        large.conditions.farm_size_range = Some(FarmSizeRange::new(dec!(5.0), dec!(100)));
        large.calculations.coverage_rate_per_hectare = ugx(dec!(430000));
        large.priority = Some(1);

        let mut small = maize_rule();
        small.priority = Some(2);

        let svc = service_with(vec![small, large], vec![]);

        let estate = AssessmentInput::new("maize", dec!(12), RiskLevel::Medium, "Eastern");
        let quote = svc.quote(&estate).unwrap();
        assert_eq!(quote.coverage_rate_per_hectare.amount(), dec!(430000));

        let smallholding = AssessmentInput::new("maize", dec!(2), RiskLevel::Medium, "Eastern");
        let quote = svc.quote(&smallholding).unwrap();
        assert_eq!(quote.coverage_rate_per_hectare.amount(), dec!(480000));
    }
}

mod precedence {
    use super::*;

    fn rule_with_priority(priority: i32, rate: rust_decimal::Decimal) -> BusinessRule {
        let mut rule = maize_rule();
        rule.name = format!("priority-{}", priority);
        rule.calculations.coverage_rate_per_hectare = ugx(rate);
        rule.priority = Some(priority);
        rule
    }

    /// Lower priority value wins regardless of catalog insertion order
    #[test]
    fn test_priority_independent_of_insertion_order() {
        let input = AssessmentInput::new("maize", dec!(2.0), RiskLevel::Medium, "Eastern");

        let forward = service_with(
            vec![rule_with_priority(1, dec!(500000)), rule_with_priority(2, dec!(450000))],
            vec![],
        );
        let reversed = service_with(
            vec![rule_with_priority(2, dec!(450000)), rule_with_priority(1, dec!(500000))],
            vec![],
        );

        let a = forward.quote(&input).unwrap();
        let b = reversed.quote(&input).unwrap();

        assert_eq!(a.coverage_rate_per_hectare.amount(), dec!(500000));
        assert_eq!(
            a.coverage_rate_per_hectare,
            b.coverage_rate_per_hectare
        );
    }

    /// Among unprioritised rules the more specific one governs
    #[test]
    fn test_specificity_tie_break() {
        let mut broad = maize_rule();
        broad.name = "Any crop".to_string();
        broad.conditions.crop_types = Selector::any();
        broad.conditions.locations = Selector::any();
        broad.conditions.farm_size_range = None;
        broad.calculations.coverage_rate_per_hectare = ugx(dec!(300000));

        let narrow = maize_rule();

        let svc = service_with(vec![broad, narrow], vec![]);
        let input = AssessmentInput::new("maize", dec!(2.0), RiskLevel::Medium, "Eastern");

        let quote = svc.quote(&input).unwrap();
        assert_eq!(quote.coverage_rate_per_hectare.amount(), dec!(480000));
    }
}

mod fallback {
    use super::*;

    /// No matching rule but a template exists: template-derived quote with
    /// the template audit source
    #[test]
    fn test_template_fallback() {
        let mut rule = maize_rule();
        rule.conditions.locations = Selector::of(["Northern"]);

        let svc = service_with(vec![rule], vec![maize_template()]);
        let input = AssessmentInput::new("maize", dec!(2.0), RiskLevel::Medium, "Eastern");

        let quote = svc.quote(&input).unwrap();
        assert_eq!(quote.source.to_string(), "template:maize");
        assert_eq!(quote.coverage_rate_per_hectare.amount(), dec!(400000));
        assert_eq!(quote.deductible_percent, DEFAULT_DEDUCTIBLE_PERCENT);
        assert_eq!(quote.duration_days, 180);
    }

    /// Risk adjustment applies to template bases exactly as to rule bases
    #[test]
    fn test_template_fallback_with_high_risk() {
        let svc = service_with(vec![], vec![maize_template()]);
        let input = AssessmentInput::new("maize", dec!(2.0), RiskLevel::High, "Eastern");

        let quote = svc.quote(&input).unwrap();
        assert_eq!(quote.coverage_rate_per_hectare.amount(), dec!(360000));
        assert_eq!(quote.premium_rate_percent, dec!(15));
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_negative_farm_size() {
        let svc = service_with(vec![maize_rule()], vec![maize_template()]);
        let input = AssessmentInput::new("maize", dec!(-1), RiskLevel::Low, "Eastern");

        assert!(matches!(
            svc.quote(&input),
            Err(UnderwritingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_no_rule_and_no_template() {
        let svc = service_with(vec![maize_rule()], vec![maize_template()]);
        let input = AssessmentInput::new("vanilla", dec!(2.0), RiskLevel::Low, "Eastern");

        assert!(matches!(
            svc.quote(&input),
            Err(UnderwritingError::TemplateNotFound { crop_type }) if crop_type == "vanilla"
        ));
    }

    /// The error message names the missing data, never a generic failure
    #[test]
    fn test_error_messages_are_specific() {
        let svc = service_with(vec![], vec![]);
        let input = AssessmentInput::new("vanilla", dec!(2.0), RiskLevel::Low, "Eastern");

        let err = svc.quote(&input).unwrap_err();
        assert!(err.to_string().contains("vanilla"));
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_same_snapshot_same_input_same_quote() {
        let svc = service_with(vec![maize_rule()], vec![maize_template()]);
        let input = AssessmentInput::new("maize", dec!(2.5), RiskLevel::High, "Eastern");
        let effective = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();

        let first = svc.quote_at(&input, effective).unwrap();
        for _ in 0..5 {
            let next = svc.quote_at(&input, effective).unwrap();
            assert_eq!(first.source, next.source);
            assert_eq!(first.total_coverage, next.total_coverage);
            assert_eq!(first.premium_amount, next.premium_amount);
            assert_eq!(first.deductible_amount, next.deductible_amount);
            assert_eq!(first.period, next.period);
            assert_eq!(first.catalog_version, next.catalog_version);
        }
    }
}
