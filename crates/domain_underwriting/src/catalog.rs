//! Rule catalog snapshots
//!
//! A `RuleCatalog` is an immutable, versioned snapshot of the business rules
//! and per-crop templates. Rule authoring happens elsewhere; this module only
//! constructs snapshots (from a builder or a JSON document), validates them,
//! and fixes the rule evaluation order at construction time.
//!
//! Evaluation order: explicit priority ascending (prioritised rules before
//! unprioritised ones), then specificity descending, then catalog insertion
//! order. In-flight quote calculations hold one snapshot for their whole
//! match+calculate pass, so a concurrent catalog swap can never produce a
//! quote straddling two rule sets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use core_kernel::{CatalogVersion, Money};

use crate::error::CatalogError;
use crate::rule::{validate_percent, BusinessRule, RuleStatus};

/// Crop-specific default pricing used when no rule matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyTemplate {
    pub crop_type: String,
    /// Coverage per hectare, in the policy currency
    pub base_coverage_rate: Money,
    /// Premium as a percentage of total coverage, in [0, 100]
    pub base_premium_rate: Decimal,
    /// Cover duration in days, strictly positive
    pub standard_duration_days: i64,
}

impl PolicyTemplate {
    fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidTemplate {
            crop_type: self.crop_type.clone(),
            reason,
        };
        if self.crop_type.trim().is_empty() {
            return Err(invalid("Template crop type is empty".to_string()));
        }
        if self.base_coverage_rate.is_negative() {
            return Err(invalid(format!(
                "Negative base coverage rate {}",
                self.base_coverage_rate
            )));
        }
        validate_percent("base_premium_rate", self.base_premium_rate).map_err(invalid)?;
        if self.standard_duration_days <= 0 {
            return Err(invalid(format!(
                "Duration must be positive, got {} days",
                self.standard_duration_days
            )));
        }
        Ok(())
    }
}

/// Serialized catalog shape, as authored by the catalog owner
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    rules: Vec<BusinessRule>,
    #[serde(default)]
    templates: Vec<PolicyTemplate>,
}

/// An immutable, versioned snapshot of rules and templates
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    version: CatalogVersion,
    /// All rules in evaluation order; inactive rules are filtered at read time
    rules: Vec<BusinessRule>,
    templates: HashMap<String, PolicyTemplate>,
}

impl RuleCatalog {
    /// Starts building a catalog snapshot
    pub fn builder() -> RuleCatalogBuilder {
        RuleCatalogBuilder::default()
    }

    /// Parses and validates a catalog from its JSON document form
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on malformed JSON or misconfigured entries
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut builder = Self::builder();
        for rule in document.rules {
            builder = builder.rule(rule);
        }
        for template in document.templates {
            builder = builder.template(template);
        }
        builder.build()
    }

    /// The snapshot's version token
    pub fn version(&self) -> CatalogVersion {
        self.version
    }

    /// Active rules in evaluation order
    pub fn active_rules(&self) -> impl Iterator<Item = &BusinessRule> {
        self.rules.iter().filter(|r| r.status == RuleStatus::Active)
    }

    /// All rules, including inactive ones, in evaluation order
    pub fn all_rules(&self) -> &[BusinessRule] {
        &self.rules
    }

    /// The default template for a crop, if one exists
    pub fn template_for(&self, crop_type: &str) -> Option<&PolicyTemplate> {
        self.templates.get(crop_type)
    }

    /// Number of templates in the snapshot
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

/// Builder accumulating rules and templates in insertion order
#[derive(Debug, Default)]
pub struct RuleCatalogBuilder {
    rules: Vec<BusinessRule>,
    templates: Vec<PolicyTemplate>,
}

impl RuleCatalogBuilder {
    /// Adds a business rule
    pub fn rule(mut self, rule: BusinessRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a per-crop template
    pub fn template(mut self, template: PolicyTemplate) -> Self {
        self.templates.push(template);
        self
    }

    /// Validates all entries and freezes the evaluation order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for misconfigured rules or templates; a
    /// snapshot is only ever built whole
    pub fn build(self) -> Result<RuleCatalog, CatalogError> {
        for rule in &self.rules {
            rule.validate()?;
        }

        let mut templates = HashMap::with_capacity(self.templates.len());
        for template in self.templates {
            template.validate()?;
            let crop = template.crop_type.clone();
            if templates.insert(crop.clone(), template).is_some() {
                return Err(CatalogError::DuplicateTemplate(crop));
            }
        }

        // Stable sort keeps insertion order as the final tie-break
        let mut rules = self.rules;
        rules.sort_by(evaluation_order);

        Ok(RuleCatalog {
            version: CatalogVersion::new_v7(),
            rules,
            templates,
        })
    }
}

/// Comparator defining the catalog's rule evaluation order
fn evaluation_order(a: &BusinessRule, b: &BusinessRule) -> Ordering {
    match (a.priority, b.priority) {
        (Some(pa), Some(pb)) => pa
            .cmp(&pb)
            .then_with(|| b.specificity().cmp(&a.specificity())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.specificity().cmp(&a.specificity()),
    }
}
