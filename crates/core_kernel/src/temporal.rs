//! Temporal types for quote validity windows
//!
//! A quote covers a farm for a bounded window: an effective timestamp and an
//! expiry derived from the rule's duration in days. The window is always
//! expressed in UTC.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: effective {effective} must be before expiry {expiry}")]
    InvalidPeriod { effective: String, expiry: String },

    #[error("Cover duration must be positive, got {0} days")]
    NonPositiveDuration(i64),
}

/// The validity window of a policy quote (effective inclusive, expiry exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverPeriod {
    /// When cover starts (inclusive)
    pub effective: DateTime<Utc>,
    /// When cover ends (exclusive)
    pub expiry: DateTime<Utc>,
}

impl CoverPeriod {
    /// Creates a cover period from explicit bounds
    pub fn new(effective: DateTime<Utc>, expiry: DateTime<Utc>) -> Result<Self, TemporalError> {
        if effective >= expiry {
            return Err(TemporalError::InvalidPeriod {
                effective: effective.to_string(),
                expiry: expiry.to_string(),
            });
        }
        Ok(Self { effective, expiry })
    }

    /// Creates a cover period spanning `duration_days` from the effective instant
    pub fn from_duration_days(
        effective: DateTime<Utc>,
        duration_days: i64,
    ) -> Result<Self, TemporalError> {
        if duration_days <= 0 {
            return Err(TemporalError::NonPositiveDuration(duration_days));
        }
        Ok(Self {
            effective,
            expiry: effective + Duration::days(duration_days),
        })
    }

    /// Returns true if the period contains the given timestamp
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.effective && timestamp < self.expiry
    }

    /// Returns the cover length in whole days
    pub fn duration_days(&self) -> i64 {
        (self.expiry - self.effective).num_days()
    }
}
