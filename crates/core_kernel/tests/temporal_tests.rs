//! Unit tests for the Temporal module
//!
//! Tests cover CoverPeriod construction, containment, and duration
//! derivation.

use chrono::{Duration, TimeZone, Utc};
use core_kernel::{CoverPeriod, TemporalError};

mod construction {
    use super::*;

    #[test]
    fn test_new_with_ordered_bounds() {
        let effective = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let expiry = Utc.with_ymd_and_hms(2026, 6, 29, 0, 0, 0).unwrap();
        let period = CoverPeriod::new(effective, expiry).unwrap();

        assert_eq!(period.effective, effective);
        assert_eq!(period.expiry, expiry);
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let effective = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let expiry = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

        assert!(matches!(
            CoverPeriod::new(effective, expiry),
            Err(TemporalError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_new_rejects_zero_length_period() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        assert!(CoverPeriod::new(instant, instant).is_err());
    }

    #[test]
    fn test_from_duration_days_spans_the_duration() {
        let effective = Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap();
        let period = CoverPeriod::from_duration_days(effective, 120).unwrap();

        assert_eq!(period.effective, effective);
        assert_eq!(period.expiry, effective + Duration::days(120));
        assert_eq!(period.duration_days(), 120);
    }

    #[test]
    fn test_from_duration_days_rejects_zero() {
        let effective = Utc::now();
        assert_eq!(
            CoverPeriod::from_duration_days(effective, 0),
            Err(TemporalError::NonPositiveDuration(0))
        );
    }

    #[test]
    fn test_from_duration_days_rejects_negative() {
        let effective = Utc::now();
        assert_eq!(
            CoverPeriod::from_duration_days(effective, -30),
            Err(TemporalError::NonPositiveDuration(-30))
        );
    }
}

mod containment {
    use super::*;

    #[test]
    fn test_effective_is_inclusive_expiry_exclusive() {
        let effective = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let period = CoverPeriod::from_duration_days(effective, 90).unwrap();

        assert!(period.contains(effective));
        assert!(period.contains(effective + Duration::days(45)));
        assert!(!period.contains(period.expiry));
        assert!(!period.contains(effective - Duration::seconds(1)));
    }
}
