//! Alias registry behavior through the facade.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;

use ledger_ids::{AliasError, AliasReader, AliasSnapshot, AliasWriter, Aliaser, Id, IdParser};
use ledger_ids_testkit::generators;
use ledger_ids_testkit::{batman_id, gordon_id, populated_aliaser, run_all_alias, IdFixture};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn aliaser_passes_conformance_suite() {
    init_tracing();
    run_all_alias(Aliaser::new);
}

#[test]
fn snapshot_survives_json_and_restores() {
    init_tracing();
    let aliaser = populated_aliaser();
    let json = serde_json::to_string(&aliaser.snapshot()).unwrap();

    let snapshot: AliasSnapshot = serde_json::from_str(&json).unwrap();
    let restored = Aliaser::from_snapshot(&snapshot).unwrap();

    assert_eq!(restored.snapshot(), aliaser.snapshot());
    assert_eq!(restored.primary_alias(&batman_id()).unwrap(), "Batman");
    assert_eq!(restored.lookup("Jim").unwrap(), gordon_id());
}

#[test]
fn display_names_prefer_aliases() {
    let parser = IdParser::default();
    let aliaser = populated_aliaser();
    let unknown = Id::hash_of(b"joker");

    assert_eq!(parser.display_name(&aliaser, &batman_id()), "Batman");
    assert_eq!(parser.display_name(&aliaser, &unknown), unknown.to_string());

    aliaser.remove_alias("Batman").unwrap();
    assert_eq!(parser.display_name(&aliaser, &batman_id()), "Dark Knight");
}

#[test]
fn concurrent_writers_agree_on_one_owner() {
    init_tracing();
    let aliaser = Arc::new(Aliaser::new());
    let ids = IdFixture::with_seed(42).ids(16);

    let handles: Vec<_> = ids
        .iter()
        .copied()
        .map(|id| {
            let aliaser = Arc::clone(&aliaser);
            thread::spawn(move || {
                aliaser.alias(id, &format!("own-{id}")).unwrap();
                aliaser.alias(id, "contested").is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);

    let owner = aliaser.lookup("contested").unwrap();
    assert!(ids.contains(&owner));
    assert_eq!(aliaser.aliases(&owner).last().map(String::as_str), Some("contested"));

    for id in &ids {
        assert_eq!(aliaser.primary_alias(id).unwrap(), format!("own-{id}"));
        if *id != owner {
            assert!(matches!(
                aliaser.alias(*id, "contested"),
                Err(AliasError::AliasConflict { existing, .. }) if existing == owner
            ));
        }
    }
}

proptest! {
    #[test]
    fn aliased_names_resolve_and_display(
        id in generators::id(),
        names in prop::collection::btree_set(generators::alias_name(), 1..8),
    ) {
        let parser = IdParser::default();
        let aliaser = Aliaser::new();
        let names: Vec<String> = names.into_iter().collect();

        for name in &names {
            aliaser.alias(id, name).unwrap();
        }

        prop_assert_eq!(parser.display_name(&aliaser, &id), names[0].clone());
        for name in &names {
            prop_assert_eq!(parser.resolve(&aliaser, name).unwrap(), id);
        }

        prop_assert_eq!(aliaser.remove_aliases(&id), names);
        prop_assert_eq!(parser.display_name(&aliaser, &id), parser.format_id(&id));
        prop_assert!(aliaser.is_empty());
    }

    #[test]
    fn names_never_move_between_ids(
        a in generators::id(),
        b in generators::id(),
        name in generators::alias_name(),
    ) {
        prop_assume!(a != b);
        let aliaser = Aliaser::new();

        aliaser.alias(a, &name).unwrap();
        let conflict = aliaser.alias(b, &name);
        prop_assert_eq!(
            conflict,
            Err(AliasError::AliasConflict { alias: name.clone(), existing: a })
        );
        prop_assert_eq!(aliaser.lookup(&name).unwrap(), a);
        prop_assert!(aliaser.aliases(&b).is_empty());
    }
}
