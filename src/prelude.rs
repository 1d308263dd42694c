//! Commonly used items for convenient importing.
//!
//! ```rust
//! use rescoll::prelude::*;
//!
//! fn oldest(queue: &mut ResourceCollection<u32>) -> Result<u32, CollectionError> {
//!     queue.rewind();
//!     Ok(queue.fetch()?)
//! }
//!
//! let mut queue = ResourceCollection::from(vec![3, 1, 2]);
//! assert_eq!(oldest(&mut queue), Ok(3));
//! ```
//!
//! # What's Included
//!
//! - **[`ResourceCollection`]** and its **[`CursorState`]**
//! - **[`ResourceKey`]** and **[`Seed`]**
//! - The error kinds: **[`KeyNotFoundError`]**, **[`IterationExhaustedError`]**
//!   and **[`CollectionError`]**

pub use crate::{
    CollectionError, CursorState, IterationExhaustedError, KeyNotFoundError, ResourceCollection,
    ResourceKey, Seed,
};
