#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_get_missing_key() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("nope").unwrap(), None);
}

#[test]
fn test_set_then_get() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.set("greeting", "hello").unwrap();
    assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
}

#[test]
fn test_set_overwrites() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
}

#[test]
fn test_keys_are_independent() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_empty_value_is_stored() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.set("k", "").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some(""));
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("cashbook.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.set("keuangan-data", "[]").unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get("keuangan-data").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_reopen_does_not_reapply_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cashbook.db");
    SqliteStore::open(&path).unwrap();
    SqliteStore::open(&path).unwrap();

    let conn = rusqlite::Connection::open(&path).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_memory_store() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

    let seeded = MemoryStore::with_value("k", "seeded");
    assert_eq!(seeded.get("k").unwrap().as_deref(), Some("seeded"));
}
