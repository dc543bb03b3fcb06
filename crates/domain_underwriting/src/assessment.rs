//! Assessment inputs from the external Risk Assessment Service
//!
//! The upstream service owns the business semantics of risk-tier
//! classification; this module only guards against structurally malformed
//! inputs (non-positive farm size, empty crop or location).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnderwritingError;

/// Categorical risk classification supplied by the assessment process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All tiers, in ascending severity
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RiskLevel {
    type Err = UnderwritingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(UnderwritingError::invalid_input(format!(
                "Unknown risk tier '{}'",
                other
            ))),
        }
    }
}

/// A single farm assessment to be priced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Crop grown on the assessed farm
    pub crop_type: String,
    /// Farm size in hectares, strictly positive
    pub farm_size_hectares: Decimal,
    /// Risk tier assigned by the assessment process
    pub risk_level: RiskLevel,
    /// Region identifier of the farm
    pub location: String,
}

impl AssessmentInput {
    /// Creates a new assessment input
    pub fn new(
        crop_type: impl Into<String>,
        farm_size_hectares: Decimal,
        risk_level: RiskLevel,
        location: impl Into<String>,
    ) -> Self {
        Self {
            crop_type: crop_type.into(),
            farm_size_hectares,
            risk_level,
            location: location.into(),
        }
    }

    /// Validates structural well-formedness, rejected before matching
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the offending field
    pub fn validate(&self) -> Result<(), UnderwritingError> {
        if self.crop_type.trim().is_empty() {
            return Err(UnderwritingError::invalid_input("Crop type is empty"));
        }
        if self.location.trim().is_empty() {
            return Err(UnderwritingError::invalid_input("Location is empty"));
        }
        if self.farm_size_hectares <= Decimal::ZERO {
            return Err(UnderwritingError::invalid_input(format!(
                "Farm size must be positive, got {} ha",
                self.farm_size_hectares
            )));
        }
        Ok(())
    }
}
