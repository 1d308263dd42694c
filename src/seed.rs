//! Initial contents of a collection, and the input of
//! [`bulk`](crate::ResourceCollection::bulk).
//!
//! A [`Seed`] is the only configuration a collection takes. It can be nothing,
//! a bare value, a list, or keyed entries:
//!
//! ```
//! use rescoll::{ResourceCollection, ResourceKey, Seed};
//!
//! let single = ResourceCollection::from(Seed::single("only"));
//! assert_eq!(single.get(0), Ok(&"only"));
//!
//! let listed = ResourceCollection::from(Seed::from(vec!["a", "b"]));
//! assert_eq!(listed.keys().collect::<Vec<_>>(), [&ResourceKey::Index(0), &ResourceKey::Index(1)]);
//!
//! let keyed = ResourceCollection::from(Seed::keyed([("x", 1), ("y", 2)]));
//! assert_eq!(keyed.get("y"), Ok(&2));
//! ```

use alloc::vec::Vec;

use crate::ResourceKey;

/// The contents a collection is built from, or merged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed<V> {
    /// No values.
    Empty,
    /// A bare value, stored under key `0`.
    Single(V),
    /// A list of values, keyed by position starting at `0`.
    List(Vec<V>),
    /// Entries with caller-chosen keys, in order. A repeated key overwrites the
    /// earlier value but keeps the earlier position.
    Keyed(Vec<(ResourceKey, V)>),
}

impl<V> Seed<V> {
    /// Wraps a bare value.
    #[must_use]
    pub fn single(value: V) -> Self {
        Seed::Single(value)
    }

    /// Collects keyed entries.
    #[must_use]
    pub fn keyed<K, I>(entries: I) -> Self
    where
        K: Into<ResourceKey>,
        I: IntoIterator<Item = (K, V)>,
    {
        Seed::Keyed(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Returns the number of entries the seed holds, repeated keys included.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Seed::Empty => 0,
            Seed::Single(_) => 1,
            Seed::List(values) => values.len(),
            Seed::Keyed(entries) => entries.len(),
        }
    }

    /// Returns `true` if the seed holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_entries(self) -> Vec<(ResourceKey, V)> {
        match self {
            Seed::Empty => Vec::new(),
            Seed::Single(value) => alloc::vec![(ResourceKey::Index(0), value)],
            Seed::List(values) => values
                .into_iter()
                .enumerate()
                .map(|(position, value)| (ResourceKey::from(position), value))
                .collect(),
            Seed::Keyed(entries) => entries,
        }
    }
}

impl<V> Default for Seed<V> {
    fn default() -> Self {
        Seed::Empty
    }
}

impl<V> From<Vec<V>> for Seed<V> {
    fn from(values: Vec<V>) -> Self {
        Seed::List(values)
    }
}

impl<const N: usize, V> From<[V; N]> for Seed<V> {
    fn from(values: [V; N]) -> Self {
        Seed::List(Vec::from(values))
    }
}

impl<V> From<Option<V>> for Seed<V> {
    fn from(value: Option<V>) -> Self {
        value.map_or(Seed::Empty, Seed::Single)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn test_single_is_keyed_zero() {
        assert_eq!(
            Seed::single('a').into_entries(),
            vec![(ResourceKey::Index(0), 'a')]
        );
    }

    #[test]
    fn test_list_keys_by_position() {
        let entries = Seed::from(['a', 'b', 'c']).into_entries();
        let keys: Vec<_> = entries.into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, [0, 1, 2].map(ResourceKey::Index));
    }

    #[test]
    fn test_keyed_keeps_caller_keys() {
        let seed = Seed::keyed([("b", 1), ("a", 2)]);
        assert_eq!(seed.len(), 2);
        assert_eq!(
            seed.into_entries(),
            vec![(ResourceKey::from("b"), 1), (ResourceKey::from("a"), 2)]
        );
    }

    #[test]
    fn test_option_seed() {
        assert!(Seed::<u8>::from(None).is_empty());
        assert_eq!(Seed::from(Some(4)), Seed::Single(4));
        assert!(Seed::<u8>::default().into_entries().is_empty());
    }
}
