//! Comprehensive unit tests for the Identifiers module
//!
//! Tests cover all identifier types, their creation, parsing,
//! conversion, and display formatting.

use core_kernel::{DocumentId, EntryId, InstallmentId, PartyId};
use uuid::Uuid;

mod entry_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = EntryId::new();
        let id2 = EntryId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = EntryId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = EntryId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = EntryId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(EntryId::prefix(), "ENT");
    }

    #[test]
    fn test_display_format() {
        let id = EntryId::new();
        let display = id.to_string();
        assert!(display.starts_with("ENT-"));
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = EntryId::new();
        let string = original.to_string();
        let parsed: EntryId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id: EntryId = uuid.into();
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_json_serialization() {
        let id = EntryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod installment_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = InstallmentId::new();
        let id2 = InstallmentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(InstallmentId::prefix(), "INS");
    }

    #[test]
    fn test_display_format() {
        let id = InstallmentId::new();
        let display = id.to_string();
        assert!(display.starts_with("INS-"));
    }

    #[test]
    fn test_roundtrip() {
        let original = InstallmentId::new();
        let string = original.to_string();
        let parsed: InstallmentId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }
}

mod cross_type_tests {
    use super::*;

    #[test]
    fn test_different_id_types_are_distinct() {
        // Same UUID, different identifier types (can't mix EntryId with
        // InstallmentId at compile time)
        let uuid = Uuid::new_v4();
        let entry_id = EntryId::from_uuid(uuid);
        let installment_id = InstallmentId::from_uuid(uuid);

        assert_eq!(*entry_id.as_uuid(), *installment_id.as_uuid());
    }

    #[test]
    fn test_id_prefixes_are_unique() {
        let prefixes = vec![
            EntryId::prefix(),
            InstallmentId::prefix(),
            DocumentId::prefix(),
            PartyId::prefix(),
        ];

        let mut unique_prefixes: Vec<&str> = prefixes.clone();
        unique_prefixes.sort();
        unique_prefixes.dedup();

        assert_eq!(
            prefixes.len(),
            unique_prefixes.len(),
            "All identifier prefixes should be unique"
        );
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_nil_uuid() {
        let nil_uuid = Uuid::nil();
        let id = EntryId::from_uuid(nil_uuid);
        assert!(id.as_uuid().is_nil());
    }

    #[test]
    fn test_max_uuid() {
        let max_uuid = Uuid::max();
        let id = EntryId::from_uuid(max_uuid);
        assert_eq!(*id.as_uuid(), max_uuid);
    }
}
