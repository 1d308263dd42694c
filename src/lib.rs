#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A keyed, cursor-driven resource collection.
//!
//! ## Overview
//!
//! This crate provides [`ResourceCollection`], a mutable ordered collection
//! that combines three ways of working with the same entries:
//!
//! - **Keyed access**: look values up, overwrite them, or remove them by
//!   [`ResourceKey`], which is either an integer or a string.
//! - **Cursor traversal**: an internal cursor that can be rewound, advanced,
//!   and read, in the order entries were added.
//! - **Destructive fetching**: [`fetch`](ResourceCollection::fetch) removes
//!   and returns whatever is under the cursor, so a collection doubles as a
//!   queue.
//!
//! ## Quick Example
//!
//! ```
//! use rescoll::prelude::*;
//!
//! let mut jobs = ResourceCollection::from(vec!["build", "test", "deploy"]);
//! jobs.set("owner", "ci");
//!
//! // Keyed access.
//! assert_eq!(jobs.get("owner"), Ok(&"ci"));
//!
//! // Drop a job; integer keys close the gap.
//! jobs.delete(1).unwrap();
//! assert_eq!(jobs.get(1), Ok(&"deploy"));
//!
//! // Dequeue from the cursor.
//! assert_eq!(jobs.fetch(), Ok("build"));
//! assert_eq!(jobs.fetch(), Ok("deploy"));
//! assert_eq!(jobs.fetch(), Ok("ci"));
//! assert!(jobs.fetch().unwrap_err().is_exhausted());
//! ```
//!
//! ## Keys
//!
//! Integer keys behave like array indices. [`push`](ResourceCollection::push)
//! appends under the next free integer, and removing an integer key with
//! [`delete`](ResourceCollection::delete) or
//! [`fetch`](ResourceCollection::fetch) renumbers every integer key back to
//! `0..n`, keeping their order. String keys are never renumbered.
//! [`unset`](ResourceCollection::unset) removes without renumbering and
//! without failing.
//!
//! ## Cursor
//!
//! The cursor is a position in storage order with three states, see
//! [`CursorState`]. Removals keep it pointing at the same entry, or at the
//! entry that followed a removed one.
//!
//! ## Errors
//!
//! Operations fail with one of two kinds, both in [`error`](crate::error):
//! [`KeyNotFoundError`] and [`IterationExhaustedError`]. [`CollectionError`]
//! joins them for use with `?`.
//!
//! ## Values
//!
//! Values are opaque. The collection is generic over the value type; to store
//! values of mixed types, use an enum or [`serde_json::Value`].
//!
//! ## Serialization
//!
//! [`codec::encode`] and [`codec::decode`] turn a collection into bytes and
//! back, keeping keys, values and order.
//!
//! ## Logging
//!
//! Structural mutations emit [`tracing`] events at `TRACE` level. No
//! subscriber is installed by this crate.
//!
//! ## Features
//!
//! - `std`: enables the `std` features of the dependencies. The crate is
//!   `no_std` with `alloc` otherwise.

extern crate alloc;

pub mod codec;
pub mod collection;
pub mod error;
pub mod key;
pub mod prelude;
pub mod seed;

pub use self::{
    collection::{CursorState, ResourceCollection},
    error::{
        CodecDirection, CodecError, CollectionError, IterationExhaustedError, KeyNotFoundError,
    },
    key::ResourceKey,
    seed::Seed,
};
