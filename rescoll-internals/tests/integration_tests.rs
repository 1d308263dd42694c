//! Integration tests for the rescoll-internals crate.
//!
//! ## Store Tests
//! - Appending after explicit integer keys, negative keys and removals
//! - Refusing to append once the largest integer key is taken
//! - Compaction of integer keys around string keys
//! - Position reporting on removal
//!
//! ## Cursor Tests
//! - Advancing, resolving and exhaustion
//! - Re-clamping after removals before, at and after the cursor
//!
//! ## Combined Tests
//! - Dequeuing through the cursor while compacting

use rescoll_internals::{RawCursor, RawStore, StoreKey};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum TestKey {
    Int(i64),
    Str(String),
}

impl TestKey {
    fn str(name: &str) -> Self {
        TestKey::Str(name.to_owned())
    }
}

impl StoreKey for TestKey {
    fn as_index(&self) -> Option<i64> {
        match self {
            TestKey::Int(index) => Some(*index),
            TestKey::Str(_) => None,
        }
    }

    fn from_index(index: i64) -> Self {
        TestKey::Int(index)
    }
}

fn keys<V>(store: &RawStore<TestKey, V>) -> Vec<TestKey> {
    store.keys().cloned().collect()
}

fn values<V: Copy>(store: &RawStore<TestKey, V>) -> Vec<V> {
    store.values().copied().collect()
}

#[test]
fn test_append_assigns_sequential_keys() {
    let mut store = RawStore::new();
    assert_eq!(store.append('a'), Ok(0));
    assert_eq!(store.append('b'), Ok(1));
    assert_eq!(store.append('c'), Ok(2));

    assert_eq!(store.len(), 3);
    assert_eq!(keys(&store), [TestKey::Int(0), TestKey::Int(1), TestKey::Int(2)]);
    assert_eq!(values(&store), ['a', 'b', 'c']);
}

#[test]
fn test_append_follows_explicit_integer_keys() {
    let mut store = RawStore::new();
    store.insert(TestKey::Int(7), 1);
    assert_eq!(store.append(2), Ok(8));

    // Negative keys never pull the mark down.
    store.insert(TestKey::Int(-3), 3);
    assert_eq!(store.append(4), Ok(9));

    // String keys do not touch it either.
    store.insert(TestKey::str("x"), 5);
    assert_eq!(store.next_index(), 10);
}

#[test]
fn test_negative_keys_on_empty_store_append_at_zero() {
    let mut store = RawStore::new();
    store.insert(TestKey::Int(-5), 'n');
    assert_eq!(store.append('z'), Ok(0));
}

#[test]
fn test_append_refuses_taken_max_key() {
    let mut store = RawStore::new();
    store.insert(TestKey::Int(i64::MAX), "max");
    assert_eq!(store.next_index(), i64::MAX);

    assert_eq!(store.append("pushed"), Err("pushed"));
    assert_eq!(store.len(), 1);
    assert_eq!(values(&store), ["max"]);
}

#[test]
fn test_append_takes_max_key_once() {
    let mut store = RawStore::new();
    store.insert(TestKey::Int(i64::MAX - 1), 0);
    assert_eq!(store.append(1), Ok(i64::MAX));
    assert_eq!(store.append(2), Err(2));

    // Freeing the key without compaction makes it available again.
    store.remove(&TestKey::Int(i64::MAX));
    assert_eq!(store.append(3), Ok(i64::MAX));
    assert_eq!(values(&store), [0, 3]);
}

#[test]
fn test_remove_does_not_lower_append_mark() {
    let mut store = RawStore::new();
    store.append(1).unwrap();
    store.append(2).unwrap();

    let removed = store.remove(&TestKey::Int(1));
    assert_eq!(removed, Some((1, TestKey::Int(1), 2)));

    assert_eq!(store.append(3), Ok(2));
    assert_eq!(keys(&store), [TestKey::Int(0), TestKey::Int(2)]);
}

#[test]
fn test_remove_absent_key_is_none() {
    let mut store: RawStore<TestKey, i32> = RawStore::new();
    store.append(1).unwrap();
    assert_eq!(store.remove(&TestKey::Int(5)), None);
    assert_eq!(store.remove(&TestKey::str("a")), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_insert_existing_key_keeps_position() {
    let mut store = RawStore::new();
    store.insert(TestKey::str("a"), 0);
    store.append(10).unwrap();
    assert_eq!(store.insert(TestKey::str("a"), 1), Some(0));
    assert_eq!(keys(&store), [TestKey::str("a"), TestKey::Int(0)]);
    assert_eq!(values(&store), [1, 10]);
}

#[test]
fn test_compact_skips_string_keys() {
    let mut store = RawStore::new();
    store.insert(TestKey::Int(4), 1);
    store.insert(TestKey::str("a"), 2);
    store.insert(TestKey::Int(9), 3);

    assert!(store.compact_indices());
    assert_eq!(
        keys(&store),
        [TestKey::Int(0), TestKey::str("a"), TestKey::Int(1)]
    );
    assert_eq!(values(&store), [1, 2, 3]);
    assert_eq!(store.next_index(), 2);

    // Already contiguous.
    assert!(!store.compact_indices());
}

#[test]
fn test_compact_preserves_relative_order() {
    let mut store = RawStore::new();
    for value in [10, 20, 30, 40] {
        store.append(value).unwrap();
    }
    store.remove(&TestKey::Int(0));
    store.remove(&TestKey::Int(2));
    store.compact_indices();

    assert_eq!(keys(&store), [TestKey::Int(0), TestKey::Int(1)]);
    assert_eq!(values(&store), [20, 40]);
    assert_eq!(store.append(50), Ok(2));
}

#[test]
fn test_clear_resets_append_mark() {
    let mut store = RawStore::new();
    store.append(1).unwrap();
    store.insert(TestKey::Int(40), 2);
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.append(3), Ok(0));
}

#[test]
fn test_cursor_advance_stops_at_len() {
    let mut cursor = RawCursor::new();
    assert_eq!(cursor.resolve(2), Some(0));

    cursor.advance(2);
    assert_eq!(cursor.resolve(2), Some(1));

    cursor.advance(2);
    assert_eq!(cursor.resolve(2), None);
    assert_eq!(cursor.position(), 2);

    cursor.advance(2);
    assert_eq!(cursor.position(), 2);

    // Something appended after exhaustion becomes reachable.
    assert_eq!(cursor.resolve(3), Some(2));

    cursor.reset();
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_cursor_on_empty_store_resolves_nothing() {
    let mut cursor = RawCursor::new();
    assert_eq!(cursor.resolve(0), None);
    cursor.advance(0);
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.remaining(0), 0);
}

#[test]
fn test_cursor_reclamps_after_removal() {
    let mut cursor = RawCursor::new();
    cursor.advance(5);
    cursor.advance(5);
    assert_eq!(cursor.position(), 2);

    // After the cursor: unaffected.
    cursor.on_removed(4);
    assert_eq!(cursor.position(), 2);

    // At the cursor: stays, now on the follower.
    cursor.on_removed(2);
    assert_eq!(cursor.position(), 2);

    // Before the cursor: follows its entry down.
    cursor.on_removed(0);
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.remaining(3), 2);
}

#[test]
fn test_dequeue_through_cursor() {
    let mut store = RawStore::new();
    for value in [10, 20, 30] {
        store.append(value).unwrap();
    }
    let mut cursor = RawCursor::new();
    cursor.advance(store.len());

    let mut taken = Vec::new();
    while let Some(position) = cursor.resolve(store.len()) {
        let (_, value) = store.remove_index(position).unwrap();
        cursor.on_removed(position);
        store.compact_indices();
        taken.push(value);
    }

    assert_eq!(taken, [20, 30]);
    assert_eq!(keys(&store), [TestKey::Int(0)]);
    assert_eq!(values(&store), [10]);
}

#[test]
fn test_store_auto_traits() {
    static_assertions::assert_impl_all!(RawStore<TestKey, String>: Send, Sync, Clone);
    static_assertions::assert_impl_all!(RawCursor: Send, Sync, Copy);
    static_assertions::assert_not_impl_any!(RawStore<TestKey, std::rc::Rc<u8>>: Send, Sync);
}
