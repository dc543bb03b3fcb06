//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_underwriting::PolicyQuote;
use rust_decimal::Decimal;

/// Asserts that two Money values are exactly equal, reporting both the
/// currency and the amounts on failure
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Amounts differ: actual={} {}, expected={} {}",
        actual.currency(),
        actual.amount(),
        expected.currency(),
        expected.amount()
    );
}

/// Asserts that a Money amount is rounded to its currency's minor unit
pub fn assert_rounded_to_currency(money: &Money) {
    let rounded = money.round_to_currency();
    assert_eq!(
        money.amount(),
        rounded.amount(),
        "Amount {} {} is not rounded to {} decimal places",
        money.currency(),
        money.amount(),
        money.currency().decimal_places()
    );
}

/// Asserts the structural soundness every quote must exhibit: non-negative
/// coverage, premium and deductible within coverage, a positive duration,
/// and all customer-facing amounts rounded to the policy currency
pub fn assert_quote_consistent(quote: &PolicyQuote) {
    assert!(
        !quote.total_coverage.is_negative(),
        "Quote {} has negative coverage {}",
        quote.id,
        quote.total_coverage
    );
    assert!(
        quote.premium_amount.amount() <= quote.total_coverage.amount(),
        "Quote {} premium {} exceeds coverage {}",
        quote.id,
        quote.premium_amount,
        quote.total_coverage
    );
    assert!(
        quote.deductible_amount.amount() <= quote.total_coverage.amount(),
        "Quote {} deductible {} exceeds coverage {}",
        quote.id,
        quote.deductible_amount,
        quote.total_coverage
    );
    assert!(
        quote.duration_days > 0,
        "Quote {} has non-positive duration {}",
        quote.id,
        quote.duration_days
    );
    assert_eq!(
        quote.period.duration_days(),
        quote.duration_days,
        "Quote {} cover period does not span its stated duration",
        quote.id
    );
    assert_rounded_to_currency(&quote.total_coverage);
    assert_rounded_to_currency(&quote.premium_amount);
    assert_rounded_to_currency(&quote.deductible_amount);
}

/// Asserts that a decimal percentage lies in the closed interval [0, 100]
pub fn assert_valid_percent(label: &str, value: Decimal) {
    assert!(
        value >= Decimal::ZERO && value <= Decimal::from(100),
        "{} must lie in [0, 100], got {}",
        label,
        value
    );
}
