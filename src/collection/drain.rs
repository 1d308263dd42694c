use core::iter::FusedIterator;

use crate::{ResourceCollection, ResourceKey};

/// An iterator that fetches entries from the cursor of a
/// [`ResourceCollection`] until it is exhausted.
///
/// Created by [`ResourceCollection::drain_from_cursor`]. Every item is removed
/// from the collection with the same rules as
/// [`fetch`](ResourceCollection::fetch), so integer keys are renumbered as the
/// drain goes. The key yielded with each value is the key it had right before
/// its removal.
#[must_use]
pub struct DrainFromCursor<'a, V> {
    resources: &'a mut ResourceCollection<V>,
}

impl<'a, V> DrainFromCursor<'a, V> {
    pub(crate) fn new(resources: &'a mut ResourceCollection<V>) -> Self {
        Self { resources }
    }
}

impl<V> Iterator for DrainFromCursor<'_, V> {
    type Item = (ResourceKey, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.resources.take_current().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.resources.cursor_remaining();
        (remaining, Some(remaining))
    }
}

impl<V> ExactSizeIterator for DrainFromCursor<'_, V> {}

// The collection is borrowed mutably, so nothing can be appended mid-drain.
impl<V> FusedIterator for DrainFromCursor<'_, V> {}

impl<V> core::fmt::Debug for DrainFromCursor<'_, V>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DrainFromCursor")
            .field("resources", &self.resources)
            .finish()
    }
}
