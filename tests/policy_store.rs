//! Persistence contract of the policy stores.

use std::path::Path;

use tempfile::TempDir;
use valueplay::{
    Error, PolicyTable, StateKey,
    adapters::{InMemoryStore, MsgPackStore},
    ports::PolicyStore,
};

fn populated_table() -> PolicyTable {
    let mut table = PolicyTable::new();
    table.set(StateKey::parse("X........").unwrap(), 0.45);
    table.set(StateKey::parse("XO.......").unwrap(), -0.333_333_333_333);
    table.set(StateKey::parse("XOX......").unwrap(), 0.0);
    table.set(StateKey::parse("....X....").unwrap(), 1.0);
    table
}

#[test]
fn msgpack_roundtrip_preserves_keys_and_exact_values() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("policy.msgpack");

    let store = MsgPackStore::new();
    let table = populated_table();
    store.save(&table, &path).unwrap();
    let loaded = store.load(&path).unwrap();

    assert_eq!(loaded.len(), table.len());
    for (key, value) in table.iter() {
        let parsed = StateKey::parse(key).unwrap();
        assert_eq!(loaded.value_of(&parsed), value, "value drifted for {key}");
    }
}

#[test]
fn absent_store_is_a_cold_start_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.msgpack");

    let store = MsgPackStore::new();
    let table = store.load(&path).unwrap();
    assert!(table.is_empty());
}

#[test]
fn corrupt_store_fails_loudly() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("policy.msgpack");
    std::fs::write(&path, b"\x00\x01garbage that is not a table").unwrap();

    let store = MsgPackStore::new();
    match store.load(&path) {
        Err(Error::CorruptStore { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected CorruptStore, got {other:?}"),
    }
}

#[test]
fn save_replaces_previous_store_completely() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("policy.msgpack");

    let store = MsgPackStore::new();
    store.save(&populated_table(), &path).unwrap();

    let mut small = PolicyTable::new();
    small.set(StateKey::parse("........O").unwrap(), 0.25);
    store.save(&small, &path).unwrap();

    let loaded = store.load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(
        loaded.value_of(&StateKey::parse("........O").unwrap()),
        0.25
    );
}

#[test]
fn in_memory_store_honors_the_same_contract() {
    let store = InMemoryStore::new();
    let path = Path::new("slot");

    assert!(store.load(path).unwrap().is_empty());

    store.save(&populated_table(), path).unwrap();
    let loaded = store.load(path).unwrap();
    assert_eq!(loaded, populated_table());
}
