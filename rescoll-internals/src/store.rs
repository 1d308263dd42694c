//! Insertion-ordered keyed storage.
//!
//! [`RawStore`] is a thin layer over [`IndexMap`] that adds the two rules the
//! map does not know about:
//!
//! 1. Appending picks the next free integer key. The store keeps a high-water
//!    mark for this, one past the largest integer key it has seen, never below
//!    zero. Removing an entry does not lower the mark.
//! 2. Integer keys can be compacted back to `0..n`. Compaction keeps the
//!    storage order and only rewrites keys, so positions are stable across it.
//!
//! Keys plug in through [`StoreKey`], which tells the store whether a key is
//! an integer and how to build one.

use core::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// A key that the store can classify and synthesize.
///
/// Integer keys take part in appending and compaction. Every other key is left
/// untouched by both.
pub trait StoreKey: Hash + Eq {
    /// Returns the integer value of this key, or [`None`] if it is not an
    /// integer key.
    fn as_index(&self) -> Option<i64>;

    /// Creates an integer key.
    fn from_index(index: i64) -> Self;
}

/// Ordered keyed storage with integer-key bookkeeping.
#[derive(Clone)]
pub struct RawStore<K, V> {
    /// The entries in storage order.
    entries: IndexMap<K, V, FxBuildHasher>,
    /// The key the next [`append`](Self::append) will use.
    next_index: i64,
}

impl<K, V> RawStore<K, V>
where
    K: StoreKey,
{
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            next_index: 0,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the key the next [`append`](Self::append) will use.
    pub fn next_index(&self) -> i64 {
        self.next_index
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns the value stored under `key` mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Returns the entry at `position` in storage order.
    pub fn get_index(&self, position: usize) -> Option<(&K, &V)> {
        self.entries.get_index(position)
    }

    /// Inserts or overwrites the value under `key`.
    ///
    /// A new key is placed after every existing entry; an existing key keeps
    /// its position. Returns the previous value, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(index) = key.as_index() {
            self.raise_next_index(index);
        }
        self.entries.insert(key, value)
    }

    /// Appends `value` under the next free integer key and returns that key's
    /// integer value.
    ///
    /// The mark saturates at `i64::MAX`, so once that key is taken there is no
    /// free integer left. `value` is handed back in that case and the store is
    /// left untouched.
    pub fn append(&mut self, value: V) -> Result<i64, V> {
        let index = self.next_index;
        let key = K::from_index(index);
        if self.entries.contains_key(&key) {
            return Err(value);
        }
        self.insert(key, value);
        Ok(index)
    }

    /// Removes `key`, returning the position it occupied together with the
    /// owned key and value.
    ///
    /// Later entries shift down by one position. Integer keys are not
    /// compacted; call [`compact_indices`](Self::compact_indices) for that.
    pub fn remove(&mut self, key: &K) -> Option<(usize, K, V)> {
        self.entries.shift_remove_full(key)
    }

    /// Removes the entry at `position`, with the same shifting rules as
    /// [`remove`](Self::remove).
    pub fn remove_index(&mut self, position: usize) -> Option<(K, V)> {
        self.entries.shift_remove_index(position)
    }

    /// Renumbers every integer key to `0..n` in storage order.
    ///
    /// Non-integer keys keep both their key and their position. Resets the
    /// append mark to the number of integer keys. Returns `true` if any key
    /// was rewritten.
    pub fn compact_indices(&mut self) -> bool {
        let mut next = 0_i64;
        let mut rewritten = false;
        let entries = core::mem::take(&mut self.entries);
        self.entries = entries
            .into_iter()
            .map(|(key, value)| match key.as_index() {
                Some(index) => {
                    let key = if index == next {
                        key
                    } else {
                        rewritten = true;
                        K::from_index(next)
                    };
                    next += 1;
                    (key, value)
                }
                None => (key, value),
            })
            .collect();
        self.next_index = next;
        rewritten
    }

    /// Removes every entry and resets the append mark.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_index = 0;
    }

    /// Returns an iterator over the entries in storage order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in storage order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in storage order.
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Moves the append mark past `index` if it is not already.
    fn raise_next_index(&mut self, index: i64) {
        if index >= self.next_index {
            self.next_index = index.saturating_add(1);
        }
    }
}

impl<K, V> Default for RawStore<K, V>
where
    K: StoreKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for RawStore<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> core::fmt::Debug for RawStore<K, V>
where
    K: core::fmt::Debug,
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawStore")
            .field("entries", &self.entries)
            .field("next_index", &self.next_index)
            .finish()
    }
}
