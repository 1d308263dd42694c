#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_docs_in_private_items,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
//! Internal implementation crate for [`rescoll`].
//!
//! # Overview
//!
//! This crate contains the low-level storage and position primitives that
//! power the [`rescoll`] resource collection. It knows nothing about error
//! kinds or about the public key type; it only enforces the structural rules
//! of the store.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`rescoll`] crate, not
//! this one.
//!
//! # Architecture
//!
//! - **[`store`]**: Ordered keyed storage
//!   - [`RawStore`]: An insertion-ordered map that tracks the next free
//!     integer key and can compact integer keys back to `0..n`
//!   - [`StoreKey`]: The seam through which the store tells integer keys apart
//!     from every other kind of key
//!
//! - **[`cursor`]**: Traversal position
//!   - [`RawCursor`]: A position in storage order that is re-clamped when
//!     entries are removed
//!
//! # Position Strategy
//!
//! The cursor never holds a key. It holds a position in storage order, and
//! every removal reports the position it removed from so the cursor can be
//! shifted. Renumbering integer keys rewrites keys but never moves entries,
//! so it never disturbs the cursor.
//!
//! [`rescoll`]: https://docs.rs/rescoll/latest/rescoll/

extern crate alloc;

pub mod cursor;
pub mod store;

pub use cursor::RawCursor;
pub use store::{RawStore, StoreKey};
