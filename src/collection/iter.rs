use core::iter::FusedIterator;

use crate::ResourceKey;

/// An iterator over the entries of a [`ResourceCollection`] in storage order.
///
/// Iterating does not read or move the collection's cursor.
///
/// # Examples
///
/// ```
/// use rescoll::ResourceCollection;
///
/// let mut resources = ResourceCollection::from(vec!["a", "b"]);
/// resources.set("name", "c");
///
/// for (key, value) in resources.iter() {
///     println!("{key} => {value}");
/// }
/// assert_eq!(resources.iter().len(), 3);
/// ```
///
/// [`ResourceCollection`]: crate::ResourceCollection
#[must_use]
pub struct ResourceIter<'a, V> {
    raw: indexmap::map::Iter<'a, ResourceKey, V>,
}

impl<'a, V> ResourceIter<'a, V> {
    pub(crate) fn from_raw(raw: indexmap::map::Iter<'a, ResourceKey, V>) -> Self {
        Self { raw }
    }
}

impl<'a, V> Iterator for ResourceIter<'a, V> {
    type Item = (&'a ResourceKey, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<V> DoubleEndedIterator for ResourceIter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.raw.next_back()
    }
}

impl<V> ExactSizeIterator for ResourceIter<'_, V> {
    fn len(&self) -> usize {
        self.raw.len()
    }
}

impl<V> FusedIterator for ResourceIter<'_, V> {}

impl<V> Clone for ResourceIter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
        }
    }
}

impl<V> core::fmt::Debug for ResourceIter<'_, V>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the entries of a [`ResourceCollection`], created by
/// its [`IntoIterator`] implementation.
///
/// # Examples
///
/// ```
/// use rescoll::{ResourceCollection, ResourceKey};
///
/// let resources = ResourceCollection::from(vec![String::from("a")]);
/// let entries: Vec<(ResourceKey, String)> = resources.into_iter().collect();
/// assert_eq!(entries, [(ResourceKey::Index(0), String::from("a"))]);
/// ```
///
/// [`ResourceCollection`]: crate::ResourceCollection
#[must_use]
pub struct ResourceIntoIter<V> {
    raw: indexmap::map::IntoIter<ResourceKey, V>,
}

impl<V> ResourceIntoIter<V> {
    pub(crate) fn from_raw(raw: indexmap::map::IntoIter<ResourceKey, V>) -> Self {
        Self { raw }
    }
}

impl<V> Iterator for ResourceIntoIter<V> {
    type Item = (ResourceKey, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<V> DoubleEndedIterator for ResourceIntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.raw.next_back()
    }
}

impl<V> ExactSizeIterator for ResourceIntoIter<V> {
    fn len(&self) -> usize {
        self.raw.len()
    }
}

impl<V> FusedIterator for ResourceIntoIter<V> {}

impl<V> core::fmt::Debug for ResourceIntoIter<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResourceIntoIter")
            .field("remaining", &self.raw.len())
            .finish()
    }
}
