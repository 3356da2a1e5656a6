//! Conformance suite for alias registries.
//!
//! Any type implementing both [`AliasReader`] and [`AliasWriter`] can be run
//! through [`run_all_alias`]. Each check takes a fresh registry from the
//! factory and panics with a description on the first violation.

use ledger_ids_alias::{AliasError, AliasReader, AliasWriter};
use ledger_ids_core::Id;

fn id(tag: u8) -> Id {
    let mut bytes = [0u8; 32];
    bytes[0] = tag;
    bytes[31] = 0xff;
    Id::from_bytes(bytes)
}

/// Run every conformance check against registries built by `make`.
pub fn run_all_alias<A, F>(make: F)
where
    A: AliasReader + AliasWriter,
    F: Fn() -> A,
{
    check_lookup(&make());
    check_primary_alias(&make());
    check_aliases_order(&make());
    check_conflict(&make());
    check_realias_is_noop(&make());
    check_empty_alias(&make());
    check_remove_alias(&make());
    check_remove_aliases(&make());
    check_realias_after_removal(&make());
}

/// Aliases resolve to their id; unknown names fail.
pub fn check_lookup<A: AliasReader + AliasWriter>(registry: &A) {
    registry.alias(id(1), "Batman").expect("alias Batman");
    assert_eq!(registry.lookup("Batman").expect("lookup Batman"), id(1));
    assert_eq!(
        registry.lookup("Robin"),
        Err(AliasError::AliasNotFound("Robin".to_string()))
    );
}

/// The first alias is primary; ids without aliases fall back to their text.
pub fn check_primary_alias<A: AliasReader + AliasWriter>(registry: &A) {
    assert_eq!(registry.primary_alias(&id(1)), Err(AliasError::NoPrimaryAlias(id(1))));
    assert_eq!(registry.primary_alias_or_default(&id(1)), id(1).to_string());

    registry.alias(id(1), "Batman").expect("alias Batman");
    registry.alias(id(1), "Dark Knight").expect("alias Dark Knight");
    assert_eq!(registry.primary_alias(&id(1)).expect("primary"), "Batman");
    assert_eq!(registry.primary_alias_or_default(&id(1)), "Batman");
}

/// Aliases are reported in registration order.
pub fn check_aliases_order<A: AliasReader + AliasWriter>(registry: &A) {
    assert!(registry.aliases(&id(1)).is_empty());
    for name in ["c", "a", "b"] {
        registry.alias(id(1), name).expect("alias");
    }
    assert_eq!(registry.aliases(&id(1)), vec!["c", "a", "b"]);
}

/// An alias cannot move to another id while bound.
pub fn check_conflict<A: AliasReader + AliasWriter>(registry: &A) {
    registry.alias(id(1), "Batman").expect("alias Batman");
    assert_eq!(
        registry.alias(id(2), "Batman"),
        Err(AliasError::AliasConflict {
            alias: "Batman".to_string(),
            existing: id(1),
        })
    );
    assert_eq!(registry.lookup("Batman").expect("lookup"), id(1));
    assert!(registry.aliases(&id(2)).is_empty());
}

/// Binding the same pair twice changes nothing.
pub fn check_realias_is_noop<A: AliasReader + AliasWriter>(registry: &A) {
    registry.alias(id(1), "Batman").expect("first alias");
    registry.alias(id(1), "Batman").expect("second alias");
    assert_eq!(registry.aliases(&id(1)), vec!["Batman"]);
}

/// Empty names are rejected without side effects.
pub fn check_empty_alias<A: AliasReader + AliasWriter>(registry: &A) {
    assert_eq!(registry.alias(id(1), ""), Err(AliasError::EmptyAlias));
    assert!(registry.aliases(&id(1)).is_empty());
}

/// Removing one alias leaves the others and promotes the next primary.
pub fn check_remove_alias<A: AliasReader + AliasWriter>(registry: &A) {
    registry.alias(id(1), "Batman").expect("alias Batman");
    registry.alias(id(1), "Dark Knight").expect("alias Dark Knight");

    assert_eq!(registry.remove_alias("Batman").expect("remove"), id(1));
    assert!(registry.lookup("Batman").is_err());
    assert_eq!(registry.primary_alias(&id(1)).expect("primary"), "Dark Knight");

    assert_eq!(
        registry.remove_alias("Batman"),
        Err(AliasError::AliasNotFound("Batman".to_string()))
    );

    registry.remove_alias("Dark Knight").expect("remove last");
    assert_eq!(registry.primary_alias(&id(1)), Err(AliasError::NoPrimaryAlias(id(1))));
}

/// Removing all aliases of an id frees every name and touches no other id.
pub fn check_remove_aliases<A: AliasReader + AliasWriter>(registry: &A) {
    registry.alias(id(1), "Batman").expect("alias Batman");
    registry.alias(id(1), "Dark Knight").expect("alias Dark Knight");
    registry.alias(id(2), "Robin").expect("alias Robin");

    assert_eq!(registry.remove_aliases(&id(1)), vec!["Batman", "Dark Knight"]);
    assert!(registry.aliases(&id(1)).is_empty());
    assert!(registry.lookup("Dark Knight").is_err());
    assert_eq!(registry.lookup("Robin").expect("lookup Robin"), id(2));

    assert!(registry.remove_aliases(&id(1)).is_empty());
}

/// A removed name can be bound to a different id.
pub fn check_realias_after_removal<A: AliasReader + AliasWriter>(registry: &A) {
    registry.alias(id(1), "Batman").expect("alias Batman");
    registry.remove_alias("Batman").expect("remove");
    registry.alias(id(2), "Batman").expect("realias");
    assert_eq!(registry.lookup("Batman").expect("lookup"), id(2));
    assert!(registry.aliases(&id(1)).is_empty());
}
