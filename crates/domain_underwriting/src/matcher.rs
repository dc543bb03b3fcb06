//! Rule matching over a catalog snapshot
//!
//! Pure function of the snapshot and the assessment: the first active rule
//! (in the catalog's evaluation order) whose conditions all hold governs
//! pricing; otherwise the per-crop template applies if one exists.

use crate::assessment::AssessmentInput;
use crate::catalog::{PolicyTemplate, RuleCatalog};
use crate::rule::BusinessRule;

/// Outcome of matching an assessment against a catalog snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult<'a> {
    /// A business rule governs pricing
    Rule(&'a BusinessRule),
    /// No rule matched; the crop's template default applies
    TemplateDefault(&'a PolicyTemplate),
    /// No rule matched and the crop has no template
    NoMatch,
}

/// Selects the pricing basis for an assessment
///
/// Iterates active rules in evaluation order and returns the first whose
/// predicate holds. Falls through to the crop template, then `NoMatch`.
/// The input is assumed validated; see [`AssessmentInput::validate`].
pub fn match_assessment<'a>(
    catalog: &'a RuleCatalog,
    input: &AssessmentInput,
) -> MatchResult<'a> {
    for rule in catalog.active_rules() {
        if rule.matches(input) {
            tracing::debug!(
                rule_id = %rule.id,
                rule_name = %rule.name,
                crop = %input.crop_type,
                "Rule selected for assessment"
            );
            return MatchResult::Rule(rule);
        }
    }

    match catalog.template_for(&input.crop_type) {
        Some(template) => {
            tracing::debug!(crop = %input.crop_type, "Falling back to crop template");
            MatchResult::TemplateDefault(template)
        }
        None => MatchResult::NoMatch,
    }
}
