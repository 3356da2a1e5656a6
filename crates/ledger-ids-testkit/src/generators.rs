//! Proptest generators for property-based testing.

use proptest::prelude::*;

use ledger_ids_core::{Id, NodeId, RawCertificate, ReservedTable, ShortId};

/// Generate a random Id.
pub fn id() -> impl Strategy<Value = Id> {
    any::<[u8; 32]>().prop_map(Id::from_bytes)
}

/// Generate a random non-empty Id.
pub fn non_empty_id() -> impl Strategy<Value = Id> {
    id().prop_filter("id must not be empty", |id| !id.is_zero())
}

/// Generate a random ShortId.
pub fn short_id() -> impl Strategy<Value = ShortId> {
    any::<[u8; 20]>().prop_map(ShortId::from_bytes)
}

/// Generate a random NodeId.
pub fn node_id() -> impl Strategy<Value = NodeId> {
    any::<[u8; 20]>().prop_map(NodeId::from_bytes)
}

/// Pick one of the standard reserved ids.
pub fn reserved_id() -> impl Strategy<Value = Id> {
    let ids: Vec<Id> = ReservedTable::standard().all().collect();
    prop::sample::select(ids)
}

/// Generate a raw certificate of up to `max_len` bytes.
pub fn certificate(max_len: usize) -> impl Strategy<Value = RawCertificate> {
    prop::collection::vec(any::<u8>(), 1..=max_len).prop_map(RawCertificate::new)
}

/// Generate a prefix list for [`Id::prefix`].
pub fn prefixes() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(any::<u64>(), 0..8)
}

/// Generate a suffix list for [`Id::append`].
pub fn suffixes() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 0..8)
}

/// Generate an alias name.
pub fn alias_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 _-]{0,23}".prop_map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_ids_core::QuotedText;

    proptest! {
        #[test]
        fn test_id_text_roundtrip(id in id()) {
            prop_assert_eq!(id.to_string().parse::<Id>().unwrap(), id);
        }

        #[test]
        fn test_short_id_text_roundtrip(id in short_id()) {
            prop_assert_eq!(id.to_string().parse::<ShortId>().unwrap(), id);
        }

        #[test]
        fn test_node_id_quoted_roundtrip(id in node_id()) {
            let mut target = NodeId::EMPTY;
            target.merge_quoted(&id.to_quoted()).unwrap();
            prop_assert_eq!(target, id);
        }

        #[test]
        fn test_reserved_classify_roundtrip(id in reserved_id()) {
            let table = ReservedTable::standard();
            let text = table.format(&id).unwrap();
            prop_assert_eq!(table.parse(text), Some(id));
            prop_assert_eq!(table.classify(&id), text.chars().last());
        }

        #[test]
        fn test_hashed_ids_are_not_reserved(id in non_empty_id()) {
            let hashed = Id::hash_of(id.as_bytes());
            prop_assert!(!ReservedTable::standard().is_reserved(&hashed));
            prop_assert!(!hashed.is_zero());
        }

        #[test]
        fn test_prefix_order_sensitive(id in id(), a in any::<u64>(), b in any::<u64>()) {
            prop_assume!(a != b);
            prop_assert_ne!(id.prefix(&[a, b]), id.prefix(&[b, a]));
        }

        #[test]
        fn test_derivations_deterministic(
            id in id(),
            prefixes in prefixes(),
            suffixes in suffixes(),
            cert in certificate(512),
        ) {
            prop_assert_eq!(id.prefix(&prefixes), id.prefix(&prefixes));
            prop_assert_eq!(id.append(&suffixes), id.append(&suffixes));
            prop_assert_eq!(NodeId::from_certificate(&cert), NodeId::from_certificate(&cert));
        }
    }
}
