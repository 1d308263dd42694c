//! Traversal position over a [`RawStore`](crate::RawStore).
//!
//! A [`RawCursor`] is a plain position in storage order. It does not borrow
//! the store, so the owner passes the current length to every operation that
//! needs it. Positions at or beyond the length mean the cursor is past the
//! last entry.
//!
//! After a removal the owner must call [`RawCursor::on_removed`] with the
//! removed position so the cursor keeps pointing at the same logical entry,
//! or at the entry that followed a removed one.

/// A position in storage order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCursor {
    /// Zero-based position; may equal or exceed the store length.
    position: usize,
}

impl RawCursor {
    /// Creates a cursor at the first position.
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Returns the raw position.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor back to the first position.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor one entry forward.
    ///
    /// The cursor stops at `len`, so advancing an exhausted cursor is a no-op
    /// and an entry appended later is reached.
    pub fn advance(&mut self, len: usize) {
        if self.position < len {
            self.position += 1;
        }
    }

    /// Returns the position if it refers to an entry of a store with `len`
    /// entries.
    pub fn resolve(&self, len: usize) -> Option<usize> {
        (self.position < len).then_some(self.position)
    }

    /// Returns how many entries remain from the cursor to the end of a store
    /// with `len` entries, the current one included.
    pub fn remaining(&self, len: usize) -> usize {
        len.saturating_sub(self.position)
    }

    /// Re-clamps the cursor after the entry at `removed` was taken out.
    ///
    /// Entries after `removed` move down by one, so a cursor past it follows
    /// them. A cursor on `removed` stays put and now refers to the entry that
    /// followed the removed one.
    pub fn on_removed(&mut self, removed: usize) {
        if removed < self.position {
            self.position -= 1;
        }
    }
}
