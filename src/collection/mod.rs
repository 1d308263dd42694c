//! The [`ResourceCollection`] type and its iterators.

mod drain;
mod iter;
mod owned;

pub use self::{
    drain::DrainFromCursor,
    iter::{ResourceIntoIter, ResourceIter},
    owned::{CursorState, ResourceCollection},
};
