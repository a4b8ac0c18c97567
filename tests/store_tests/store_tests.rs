//! Tests for Store
//!
//! These tests verify:
//! - Basic get/put/delete/update operations
//! - Absent vs empty-string values
//! - Command execution
//! - Concurrent access patterns

use std::sync::Arc;
use std::thread;

use nullkv::protocol::Command;
use nullkv::{KvError, Store};

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = Store::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_get_nonexistent_key() {
    let store = Store::new();
    assert_eq!(store.get("nonexistent"), None);
}

#[test]
fn test_put_get() {
    let store = Store::new();

    let stored = store.put("hello".to_string(), "world".to_string());

    assert_eq!(stored, "world");
    assert_eq!(store.get("hello"), Some("world".to_string()));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_put_overwrite() {
    let store = Store::new();

    store.put("key".to_string(), "value1".to_string());
    store.put("key".to_string(), "value2".to_string());

    assert_eq!(store.get("key"), Some("value2".to_string()));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_empty_value_is_not_absent() {
    let store = Store::new();

    store.put("key".to_string(), String::new());

    assert_eq!(store.get("key"), Some(String::new()));
}

#[test]
fn test_delete() {
    let store = Store::new();
    store.put("key".to_string(), "value".to_string());

    let deleted = store.delete("key").unwrap();

    assert_eq!(deleted, "key");
    assert_eq!(store.get("key"), None);
    assert!(store.is_empty());
}

#[test]
fn test_delete_nonexistent_key() {
    let store = Store::new();

    let result = store.delete("nonexistent");

    assert!(matches!(result, Err(KvError::KeyNotFound(ref key)) if key == "nonexistent"));
}

#[test]
fn test_delete_twice() {
    let store = Store::new();
    store.put("key".to_string(), "value".to_string());

    store.delete("key").unwrap();
    assert!(store.delete("key").is_err());
}

#[test]
fn test_update_nonexistent_key_does_not_insert() {
    let store = Store::new();

    let result = store.update("missing", "value".to_string());

    assert_eq!(result, None);
    assert_eq!(store.get("missing"), None);
    assert!(store.is_empty());
}

#[test]
fn test_update_existing_key() {
    let store = Store::new();
    store.put("key".to_string(), "old".to_string());

    let result = store.update("key", "new".to_string());

    assert_eq!(result, Some("new".to_string()));
    assert_eq!(store.get("key"), Some("new".to_string()));
}

#[test]
fn test_update_matches_put_on_present_key() {
    let updated = Store::new();
    let put = Store::new();
    updated.put("k".to_string(), "v1".to_string());
    put.put("k".to_string(), "v1".to_string());

    let from_update = updated.update("k", "v2".to_string());
    let from_put = put.put("k".to_string(), "v2".to_string());

    assert_eq!(from_update, Some(from_put));
    assert_eq!(updated.get("k"), put.get("k"));
}

#[test]
fn test_update_empty_string_value_counts_as_present() {
    let store = Store::new();
    store.put("key".to_string(), String::new());

    assert_eq!(store.update("key", "filled".to_string()), Some("filled".to_string()));
}

// =============================================================================
// Command Execution Tests
// =============================================================================

#[test]
fn test_execute_routes_commands() {
    let store = Store::new();

    let put = store
        .execute(Command::Put {
            key: "a".to_string(),
            value: "1".to_string(),
        })
        .unwrap();
    assert_eq!(put, Some("1".to_string()));

    let get = store.execute(Command::Get { key: "a".to_string() }).unwrap();
    assert_eq!(get, Some("1".to_string()));

    let update = store
        .execute(Command::Update {
            key: "a".to_string(),
            value: "2".to_string(),
        })
        .unwrap();
    assert_eq!(update, Some("2".to_string()));

    let delete = store.execute(Command::Delete { key: "a".to_string() }).unwrap();
    assert_eq!(delete, Some("a".to_string()));

    let get = store.execute(Command::Get { key: "a".to_string() }).unwrap();
    assert_eq!(get, None);
}

#[test]
fn test_execute_delete_missing_key_fails() {
    let store = Store::new();

    let result = store.execute(Command::Delete { key: "a".to_string() });

    assert!(matches!(result, Err(KvError::KeyNotFound(_))));
}

#[test]
fn test_execute_update_missing_key_returns_none() {
    let store = Store::new();

    let result = store
        .execute(Command::Update {
            key: "a".to_string(),
            value: "1".to_string(),
        })
        .unwrap();

    assert_eq!(result, None);
    assert!(store.is_empty());
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_writers_on_distinct_keys() {
    let store = Arc::new(Store::new());
    let mut handles = Vec::new();

    for t in 0..8 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                store.put(format!("t{}-k{}", t, i), format!("{}", i));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 800);
    assert_eq!(store.get("t7-k99"), Some("99".to_string()));
}

#[test]
fn test_concurrent_readers_see_whole_values() {
    let store = Arc::new(Store::new());
    let short = "a".repeat(16);
    let long = "b".repeat(4096);
    store.put("key".to_string(), short.clone());

    let writer = {
        let store = Arc::clone(&store);
        let (short, long) = (short.clone(), long.clone());
        thread::spawn(move || {
            for i in 0..500 {
                let value = if i % 2 == 0 { long.clone() } else { short.clone() };
                store.put("key".to_string(), value);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let (short, long) = (short.clone(), long.clone());
            thread::spawn(move || {
                for _ in 0..500 {
                    let value = store.get("key").unwrap();
                    assert!(value == short || value == long);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn test_concurrent_update_and_delete_never_resurrects_key() {
    for _ in 0..50 {
        let store = Arc::new(Store::new());
        store.put("key".to_string(), "v0".to_string());

        let deleter = {
            let store = Arc::clone(&store);
            thread::spawn(move || store.delete("key").is_ok())
        };
        let updater = {
            let store = Arc::clone(&store);
            thread::spawn(move || store.update("key", "v1".to_string()))
        };

        assert!(deleter.join().unwrap());
        updater.join().unwrap();

        // update never inserts, so once delete has run the key stays gone
        assert_eq!(store.get("key"), None);
    }
}
