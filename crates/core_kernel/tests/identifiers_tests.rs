//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, and display
//! formatting for the underwriting identifier types.

use core_kernel::{CatalogVersion, QuoteId, RuleId};
use uuid::Uuid;

mod creation {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = RuleId::new();
        let id2 = RuleId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let v1 = CatalogVersion::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let v2 = CatalogVersion::new_v7();

        let u1: Uuid = v1.into();
        let u2: Uuid = v2.into();
        assert!(u1 < u2, "v7 versions must sort by creation time");
    }

    #[test]
    fn test_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = QuoteId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}

mod display {
    use super::*;

    #[test]
    fn test_prefixed_display() {
        assert!(RuleId::new().to_string().starts_with("RULE-"));
        assert!(QuoteId::new().to_string().starts_with("QTE-"));
        assert!(CatalogVersion::new_v7().to_string().starts_with("CAT-"));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_round_trip_with_prefix() {
        let original = RuleId::new();
        let parsed: RuleId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_parse_bare_uuid() {
        let uuid = Uuid::new_v4();
        let parsed: QuoteId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed.as_uuid(), &uuid);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<RuleId>().is_err());
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_serializes_as_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = RuleId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn test_deserializes_from_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id: RuleId = serde_json::from_str(&format!("\"{}\"", uuid)).unwrap();
        assert_eq!(id.as_uuid(), &uuid);
    }
}
