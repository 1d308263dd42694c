use alloc::vec::Vec;

use rescoll_internals::{RawCursor, RawStore};

use crate::{
    CollectionError, IterationExhaustedError, KeyNotFoundError, ResourceKey, Seed,
    collection::{DrainFromCursor, ResourceIntoIter, ResourceIter},
};

/// Where the cursor of a [`ResourceCollection`] stands.
///
/// # Examples
///
/// ```
/// use rescoll::{CursorState, ResourceCollection, ResourceKey};
///
/// let mut resources = ResourceCollection::new();
/// assert_eq!(resources.cursor_state(), CursorState::BeforeFirst);
///
/// resources.push("a");
/// assert_eq!(resources.cursor_state(), CursorState::Positioned(&ResourceKey::Index(0)));
///
/// resources.advance();
/// assert_eq!(resources.cursor_state(), CursorState::PastLast);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState<'a> {
    /// The collection is empty, so there is nothing to point at yet.
    BeforeFirst,
    /// The cursor points at the entry with this key.
    Positioned(&'a ResourceKey),
    /// The cursor has moved past the last entry.
    PastLast,
}

/// A mutable, ordered collection with keyed access, an internal cursor, and
/// destructive fetching.
///
/// You can think of a [`ResourceCollection<V>`] as an insertion-ordered map
/// from [`ResourceKey`] to `V` that also remembers a position:
/// - Keyed access with [`get`](Self::get), [`set`](Self::set),
///   [`exists`](Self::exists) and [`unset`](Self::unset).
/// - Sequential traversal with [`rewind`](Self::rewind),
///   [`current`](Self::current), [`advance`](Self::advance),
///   [`key`](Self::key) and [`valid`](Self::valid).
/// - Structural mutation with [`push`](Self::push), [`bulk`](Self::bulk),
///   [`delete`](Self::delete) and [`fetch`](Self::fetch).
///
/// Deleting or fetching an integer key renumbers every integer key back to
/// `0..n` in storage order, like compacting an array. String keys are never
/// renumbered.
///
/// The cursor is a position in storage order. Removing an entry before it
/// moves it back by one; removing the entry under it leaves it on the entry
/// that followed. It never needs a [`rewind`](Self::rewind) to become usable
/// again.
///
/// # Examples
///
/// ```
/// use rescoll::{ResourceCollection, ResourceKey};
///
/// let mut resources = ResourceCollection::from(vec![10, 20, 30]);
///
/// resources.delete(1).unwrap();
/// assert_eq!(resources.fetch_all(), [&10, &30]);
///
/// assert_eq!(resources.fetch(), Ok(10));
/// resources.push(99);
///
/// let keys: Vec<_> = resources.keys().cloned().collect();
/// assert_eq!(keys, [ResourceKey::Index(0), ResourceKey::Index(1)]);
/// assert_eq!(resources.fetch_all(), [&30, &99]);
/// ```
#[derive(Clone)]
pub struct ResourceCollection<V> {
    store: RawStore<ResourceKey, V>,
    cursor: RawCursor,
}

impl<V> ResourceCollection<V> {
    pub(crate) fn from_raw(store: RawStore<ResourceKey, V>) -> Self {
        Self {
            store,
            cursor: RawCursor::new(),
        }
    }

    pub(crate) fn as_raw(&self) -> &RawStore<ResourceKey, V> {
        &self.store
    }

    /// Creates a new, empty `ResourceCollection`.
    ///
    /// This method is equivalent to calling [`Default::default()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let resources: ResourceCollection<String> = ResourceCollection::new();
    /// assert!(resources.is_empty());
    /// assert_eq!(resources.len(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_raw(RawStore::new())
    }

    /// Creates a collection holding a single value under key `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let resources = ResourceCollection::from_value(vec![1, 2, 3]);
    /// assert_eq!(resources.len(), 1);
    /// assert_eq!(resources.get(0), Ok(&vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn from_value(value: V) -> Self {
        Self::from(Seed::single(value))
    }

    /// Creates a collection from keyed entries, keeping the caller's keys.
    ///
    /// A repeated key overwrites the earlier value in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let resources = ResourceCollection::from_entries([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(resources.len(), 2);
    /// assert_eq!(resources.fetch_all(), [&3, &2]);
    /// ```
    #[must_use]
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<ResourceKey>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from(Seed::keyed(entries))
    }

    /// Returns the number of entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let mut resources = ResourceCollection::new();
    /// resources.push('a').push('b');
    /// assert_eq!(resources.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the collection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns `true` if `key` is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let mut resources = ResourceCollection::from(vec!["zero"]);
    /// resources.set("name", "named");
    ///
    /// assert!(resources.exists(0));
    /// assert!(resources.exists("name"));
    /// assert!(!resources.exists(1));
    /// ```
    #[must_use]
    pub fn exists(&self, key: impl Into<ResourceKey>) -> bool {
        self.store.contains(&key.into())
    }

    /// Returns a reference to the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let resources = ResourceCollection::from(vec!["a", "b"]);
    /// assert_eq!(resources.get(1), Ok(&"b"));
    /// assert!(resources.get(2).is_err());
    /// ```
    pub fn get(&self, key: impl Into<ResourceKey>) -> Result<&V, KeyNotFoundError> {
        let key = key.into();
        self.store
            .get(&key)
            .ok_or_else(|| KeyNotFoundError::new(Some(key)))
    }

    /// Returns a mutable reference to the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` is absent.
    pub fn get_mut(&mut self, key: impl Into<ResourceKey>) -> Result<&mut V, KeyNotFoundError> {
        let key = key.into();
        self.store
            .get_mut(&key)
            .ok_or_else(|| KeyNotFoundError::new(Some(key)))
    }

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// A new key goes after every existing entry. An existing key keeps its
    /// position. Returns the previous value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let mut resources = ResourceCollection::new();
    /// assert_eq!(resources.set("a", 1), None);
    /// assert_eq!(resources.set("a", 2), Some(1));
    ///
    /// // Integer keys raise the next key `push` will use.
    /// resources.set(5, 3);
    /// resources.push(4);
    /// assert_eq!(resources.get(6), Ok(&4));
    /// ```
    pub fn set(&mut self, key: impl Into<ResourceKey>, value: V) -> Option<V> {
        self.store.insert(key.into(), value)
    }

    /// Removes `key` if it is present and does nothing otherwise.
    ///
    /// Unlike [`delete`](Self::delete), this never fails and never renumbers
    /// integer keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::{ResourceCollection, ResourceKey};
    ///
    /// let mut resources = ResourceCollection::from(vec!['a', 'b', 'c']);
    /// resources.unset(1);
    /// resources.unset(7);
    ///
    /// let keys: Vec<_> = resources.keys().cloned().collect();
    /// assert_eq!(keys, [ResourceKey::Index(0), ResourceKey::Index(2)]);
    /// ```
    pub fn unset(&mut self, key: impl Into<ResourceKey>) {
        if let Some((position, _, _)) = self.store.remove(&key.into()) {
            self.cursor.on_removed(position);
        }
    }

    /// Appends `value` under the next free integer key and returns the
    /// collection for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let mut resources = ResourceCollection::new();
    /// resources.set("name", 0);
    /// resources.push(1).push(2);
    ///
    /// assert_eq!(resources.get(0), Ok(&1));
    /// assert_eq!(resources.get(1), Ok(&2));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if there is no free integer key left, which only happens once
    /// an entry is stored under `i64::MAX`. See [`try_push`](Self::try_push)
    /// for a non-panicking version.
    pub fn push(&mut self, value: V) -> &mut Self {
        if self.try_push(value).is_err() {
            panic!(
                "cannot push: integer key {} is already occupied",
                self.store.next_index()
            );
        }
        self
    }

    /// Appends `value` like [`push`](Self::push), handing it back if there is
    /// no free integer key left.
    ///
    /// The next integer key saturates at `i64::MAX`. Once an entry is stored
    /// under that key, appending would overwrite it, so the collection is
    /// left untouched instead.
    ///
    /// # Errors
    ///
    /// Returns `value` if the key `i64::MAX` is occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let mut resources = ResourceCollection::new();
    /// assert!(resources.try_push("first").is_ok());
    ///
    /// resources.set(i64::MAX, "max");
    /// assert_eq!(resources.try_push("pushed").err(), Some("pushed"));
    /// assert_eq!(resources.len(), 2);
    /// ```
    pub fn try_push(&mut self, value: V) -> Result<&mut Self, V> {
        self.store.append(value)?;
        Ok(self)
    }

    /// Calls [`set`](Self::set) for every entry of `values`, in order, and
    /// returns the collection for chaining.
    ///
    /// A list is keyed by position, so it overwrites keys `0..n`. Keyed entries
    /// keep the caller's keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::{ResourceCollection, Seed};
    ///
    /// let mut resources = ResourceCollection::from_entries([("a", 0)]);
    /// resources.push(10);
    ///
    /// resources.bulk(Seed::keyed([("a", 1), ("b", 2)]));
    /// assert_eq!(resources.get("a"), Ok(&1));
    /// assert_eq!(resources.get("b"), Ok(&2));
    /// assert_eq!(resources.get(0), Ok(&10));
    ///
    /// resources.bulk(vec![11]);
    /// assert_eq!(resources.get(0), Ok(&11));
    /// ```
    pub fn bulk(&mut self, values: impl Into<Seed<V>>) -> &mut Self {
        for (key, value) in values.into().into_entries() {
            self.store.insert(key, value);
        }
        self
    }

    /// Removes `key`.
    ///
    /// Removing an integer key renumbers all integer keys to `0..n`, keeping
    /// their relative order. Removing a string key renumbers nothing.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` is absent. The collection is left
    /// untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let mut resources = ResourceCollection::from(vec!["a", "b", "c"]);
    /// resources.delete(0).unwrap();
    /// assert_eq!(resources.get(0), Ok(&"b"));
    /// assert_eq!(resources.get(1), Ok(&"c"));
    ///
    /// assert!(resources.delete(2).is_err());
    /// ```
    pub fn delete(&mut self, key: impl Into<ResourceKey>) -> Result<(), KeyNotFoundError> {
        self.remove(key).map(drop)
    }

    /// Removes `key` like [`delete`](Self::delete) and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` is absent.
    pub fn remove(&mut self, key: impl Into<ResourceKey>) -> Result<V, KeyNotFoundError> {
        let key = key.into();
        let Some((position, key, value)) = self.store.remove(&key) else {
            return Err(KeyNotFoundError::new(Some(key)));
        };
        tracing::trace!(key = %key, position, "removed resource");
        self.settle_removal(position, &key);
        Ok(value)
    }

    /// Removes every entry and moves the cursor back to the start.
    pub fn clear(&mut self) {
        self.store.clear();
        self.cursor.reset();
    }

    /// Moves the cursor to the first entry.
    pub fn rewind(&mut self) {
        self.cursor.reset();
    }

    /// Returns the value under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`IterationExhaustedError`] if the collection is empty or the
    /// cursor has moved past the last entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::{IterationExhaustedError, ResourceCollection};
    ///
    /// let mut resources = ResourceCollection::from(vec!["a"]);
    /// assert_eq!(resources.current(), Ok(&"a"));
    ///
    /// resources.advance();
    /// assert_eq!(resources.current(), Err(IterationExhaustedError));
    /// ```
    pub fn current(&self) -> Result<&V, IterationExhaustedError> {
        self.cursor_entry()
            .map(|(_, value)| value)
            .ok_or(IterationExhaustedError)
    }

    /// Moves the cursor to the next entry in storage order.
    ///
    /// Moving past the last entry makes [`valid`](Self::valid) return `false`.
    /// Once there, further calls do nothing, but an entry appended later is
    /// picked up.
    pub fn advance(&mut self) {
        self.cursor.advance(self.store.len());
    }

    /// Returns the key under the cursor, or [`None`] if the cursor is past the
    /// last entry or the collection is empty.
    #[must_use]
    pub fn key(&self) -> Option<&ResourceKey> {
        self.cursor_entry().map(|(key, _)| key)
    }

    /// Returns `true` if the cursor points at an entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let mut resources = ResourceCollection::from(vec![1, 2, 3]);
    /// let mut seen = Vec::new();
    ///
    /// resources.rewind();
    /// while resources.valid() {
    ///     seen.push(*resources.current().unwrap());
    ///     resources.advance();
    /// }
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    #[must_use]
    pub fn valid(&self) -> bool {
        self.cursor_entry().is_some()
    }

    /// Returns the state of the cursor.
    #[must_use]
    pub fn cursor_state(&self) -> CursorState<'_> {
        if self.store.is_empty() {
            return CursorState::BeforeFirst;
        }
        match self.key() {
            Some(key) => CursorState::Positioned(key),
            None => CursorState::PastLast,
        }
    }

    /// Rewinds the cursor and returns the first value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] without a key if the collection is empty.
    /// This differs from [`current`](Self::current), which reports
    /// [`IterationExhaustedError`] in the same situation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let mut resources = ResourceCollection::from(vec!["a", "b"]);
    /// resources.advance();
    /// assert_eq!(resources.first(), Ok(&"a"));
    ///
    /// let mut empty: ResourceCollection<&str> = ResourceCollection::new();
    /// let error = empty.first().unwrap_err();
    /// assert_eq!(error.key(), None);
    /// ```
    pub fn first(&mut self) -> Result<&V, KeyNotFoundError> {
        self.rewind();
        self.cursor_entry()
            .map(|(_, value)| value)
            .ok_or_else(|| KeyNotFoundError::new(None))
    }

    /// Removes the entry under the cursor and returns its value.
    ///
    /// The removal follows the same rules as [`delete`](Self::delete),
    /// renumbering included. The cursor stays at its position, so it now points
    /// at the entry that followed the fetched one, and repeated calls drain
    /// the collection from the cursor onwards.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Exhausted`] if the collection is empty.
    /// - [`CollectionError::KeyNotFound`] without a key if the collection has
    ///   entries but the cursor has moved past the last one, the same way
    ///   [`delete`](Self::delete) fails for a key that is not there.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::{CollectionError, IterationExhaustedError, ResourceCollection};
    ///
    /// let mut resources = ResourceCollection::from(vec![1, 2]);
    /// assert_eq!(resources.fetch(), Ok(1));
    /// assert_eq!(resources.fetch(), Ok(2));
    /// assert_eq!(resources.fetch(), Err(CollectionError::Exhausted(IterationExhaustedError)));
    ///
    /// resources.push(3);
    /// resources.advance();
    /// assert!(resources.fetch().unwrap_err().is_key_not_found());
    /// ```
    pub fn fetch(&mut self) -> Result<V, CollectionError> {
        self.take_current().map(|(_, value)| value)
    }

    /// Returns an iterator that [`fetch`](Self::fetch)es entries until the
    /// cursor is exhausted, yielding each entry with the key it had before it
    /// was removed.
    ///
    /// Entries before the cursor are left in place. Dropping the iterator
    /// early keeps whatever has not been fetched yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::{ResourceCollection, ResourceKey};
    ///
    /// let mut resources = ResourceCollection::from(vec!['a', 'b', 'c']);
    /// resources.advance();
    ///
    /// let drained: Vec<_> = resources.drain_from_cursor().collect();
    /// assert_eq!(drained, [(ResourceKey::Index(1), 'b'), (ResourceKey::Index(1), 'c')]);
    /// assert_eq!(resources.fetch_all(), [&'a']);
    /// ```
    pub fn drain_from_cursor(&mut self) -> DrainFromCursor<'_, V> {
        DrainFromCursor::new(self)
    }

    /// Returns references to all values in storage order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescoll::ResourceCollection;
    ///
    /// let mut resources = ResourceCollection::new();
    /// resources.set("b", 2);
    /// resources.push(1);
    /// assert_eq!(resources.fetch_all(), [&2, &1]);
    /// ```
    #[must_use]
    pub fn fetch_all(&self) -> Vec<&V> {
        self.store.values().collect()
    }

    /// Returns an iterator over the entries in storage order.
    pub fn iter(&self) -> ResourceIter<'_, V> {
        ResourceIter::from_raw(self.store.iter())
    }

    /// Returns an iterator over the keys in storage order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &ResourceKey> + ExactSizeIterator {
        self.store.keys()
    }

    /// Returns an iterator over the values in storage order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.store.values()
    }

    pub(crate) fn cursor_remaining(&self) -> usize {
        self.cursor.remaining(self.store.len())
    }

    pub(crate) fn take_current(&mut self) -> Result<(ResourceKey, V), CollectionError> {
        if self.store.is_empty() {
            return Err(IterationExhaustedError.into());
        }
        let (position, key, value) = self
            .cursor
            .resolve(self.store.len())
            .and_then(|position| {
                let (key, value) = self.store.remove_index(position)?;
                Some((position, key, value))
            })
            .ok_or_else(|| KeyNotFoundError::new(None))?;
        tracing::trace!(key = %key, position, "fetched resource");
        self.settle_removal(position, &key);
        Ok((key, value))
    }

    fn cursor_entry(&self) -> Option<(&ResourceKey, &V)> {
        let position = self.cursor.resolve(self.store.len())?;
        self.store.get_index(position)
    }

    fn settle_removal(&mut self, position: usize, key: &ResourceKey) {
        self.cursor.on_removed(position);
        if key.is_index() && self.store.compact_indices() {
            tracing::trace!(
                next_index = self.store.next_index(),
                "compacted integer keys"
            );
        }
    }
}

impl<V> Default for ResourceCollection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Seed<V>> for ResourceCollection<V> {
    fn from(seed: Seed<V>) -> Self {
        let entries = seed.into_entries();
        let mut store = RawStore::with_capacity(entries.len());
        for (key, value) in entries {
            store.insert(key, value);
        }
        Self::from_raw(store)
    }
}

impl<V> From<Vec<V>> for ResourceCollection<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from(Seed::List(values))
    }
}

impl<const N: usize, V> From<[V; N]> for ResourceCollection<V> {
    fn from(values: [V; N]) -> Self {
        Self::from(Seed::from(values))
    }
}

/// Pushes every value in order.
///
/// # Panics
///
/// Panics under the same condition as [`ResourceCollection::push`].
impl<V> Extend<V> for ResourceCollection<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<V> FromIterator<V> for ResourceCollection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut resources = ResourceCollection::new();
        resources.extend(iter);
        resources
    }
}

impl<V> IntoIterator for ResourceCollection<V> {
    type Item = (ResourceKey, V);
    type IntoIter = ResourceIntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        ResourceIntoIter::from_raw(self.store.into_iter())
    }
}

impl<'a, V> IntoIterator for &'a ResourceCollection<V> {
    type Item = (&'a ResourceKey, &'a V);
    type IntoIter = ResourceIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compares keys, values and order. The cursor is not compared.
impl<V> PartialEq for ResourceCollection<V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V> Eq for ResourceCollection<V> where V: Eq {}

impl<V> core::fmt::Debug for ResourceCollection<V>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
