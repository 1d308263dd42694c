//! The error taxonomy of a [`ResourceCollection`](crate::ResourceCollection).
//!
//! There are exactly two ways an operation can fail:
//!
//! - [`KeyNotFoundError`]: the key an operation needs is absent. Returned by
//!   [`get`](crate::ResourceCollection::get),
//!   [`delete`](crate::ResourceCollection::delete),
//!   [`remove`](crate::ResourceCollection::remove) and, on an empty collection,
//!   [`first`](crate::ResourceCollection::first).
//! - [`IterationExhaustedError`]: there is nothing under the cursor. Returned by
//!   [`current`](crate::ResourceCollection::current).
//!
//! Both are recoverable and are meant to be matched on. [`CollectionError`]
//! joins them for callers that mix keyed and cursor operations behind one `?`.
//! [`fetch`](crate::ResourceCollection::fetch) returns it directly, since it
//! can fail either way: exhausted on an empty collection, and a missing key
//! when the cursor has moved past the last entry of a non-empty one.
//!
//! Note that `first` on an empty collection reports a missing key, while
//! `current` reports exhaustion. This mismatch is long-standing behaviour and
//! callers rely on telling the two apart.
//!
//! [`CodecError`] is separate: it belongs to [`codec`](crate::codec) and never
//! comes out of a collection operation.

use crate::ResourceKey;

/// A key was not present in the collection.
///
/// # Examples
///
/// ```
/// use rescoll::{KeyNotFoundError, ResourceCollection, ResourceKey};
///
/// let mut resources = ResourceCollection::from(vec![1, 2]);
/// let error = resources.delete(5).unwrap_err();
/// assert_eq!(error.key(), Some(&ResourceKey::Index(5)));
/// assert_eq!(error.to_string(), "Undefined resource key `5`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyNotFoundError {
    key: Option<ResourceKey>,
}

impl KeyNotFoundError {
    /// Creates a new error for `key`. Pass [`None`] when there was no key to
    /// look up, as with [`first`](crate::ResourceCollection::first) on an empty
    /// collection.
    #[must_use]
    pub fn new(key: Option<ResourceKey>) -> Self {
        Self { key }
    }

    /// The key that was looked up, if there was one.
    #[must_use]
    pub fn key(&self) -> Option<&ResourceKey> {
        self.key.as_ref()
    }
}

impl core::fmt::Display for KeyNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.key {
            Some(key) => write!(f, "Undefined resource key `{key}`"),
            None => f.write_str("Undefined resource key"),
        }
    }
}

impl core::error::Error for KeyNotFoundError {}

/// The cursor has nothing to yield: the collection is empty or the cursor has
/// moved past the last entry.
///
/// # Examples
///
/// ```
/// use rescoll::{IterationExhaustedError, ResourceCollection};
///
/// let resources: ResourceCollection<i32> = ResourceCollection::new();
/// assert_eq!(resources.current(), Err(IterationExhaustedError));
/// assert_eq!(IterationExhaustedError.to_string(), "Collection empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IterationExhaustedError;

impl core::fmt::Display for IterationExhaustedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Collection empty")
    }
}

impl core::error::Error for IterationExhaustedError {}

/// Either of the two collection error kinds.
///
/// # Examples
///
/// ```
/// use rescoll::{CollectionError, ResourceCollection};
///
/// fn total(resources: &mut ResourceCollection<u32>, offset_key: i32) -> Result<u32, CollectionError> {
///     let offset = *resources.get(offset_key)?;
///     let next = resources.fetch()?;
///     Ok(offset + next)
/// }
///
/// let mut resources = ResourceCollection::from(vec![100, 5]);
/// assert!(total(&mut resources, 7).unwrap_err().is_key_not_found());
/// assert_eq!(total(&mut resources, 1), Ok(105));
/// assert_eq!(total(&mut resources, 0), Ok(10));
///
/// let error = resources.fetch().unwrap_err();
/// assert!(error.is_exhausted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// See [`KeyNotFoundError`].
    KeyNotFound(KeyNotFoundError),
    /// See [`IterationExhaustedError`].
    Exhausted(IterationExhaustedError),
}

impl CollectionError {
    /// Returns `true` for [`CollectionError::KeyNotFound`].
    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, CollectionError::KeyNotFound(_))
    }

    /// Returns `true` for [`CollectionError::Exhausted`].
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, CollectionError::Exhausted(_))
    }
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::KeyNotFound(error) => core::fmt::Display::fmt(error, f),
            CollectionError::Exhausted(error) => core::fmt::Display::fmt(error, f),
        }
    }
}

// Transparent: `Display` already shows the inner error, so it is not a source.
impl core::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            CollectionError::KeyNotFound(error) => core::error::Error::source(error),
            CollectionError::Exhausted(error) => core::error::Error::source(error),
        }
    }
}

impl From<KeyNotFoundError> for CollectionError {
    fn from(error: KeyNotFoundError) -> Self {
        CollectionError::KeyNotFound(error)
    }
}

impl From<IterationExhaustedError> for CollectionError {
    fn from(error: IterationExhaustedError) -> Self {
        CollectionError::Exhausted(error)
    }
}

/// Encoding or decoding a collection failed.
#[derive(Debug)]
pub struct CodecError {
    direction: CodecDirection,
    source: serde_json::Error,
}

/// Which half of the codec failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecDirection {
    /// [`codec::encode`](crate::codec::encode) failed.
    Encode,
    /// [`codec::decode`](crate::codec::decode) failed.
    Decode,
}

impl CodecError {
    pub(crate) fn encode(source: serde_json::Error) -> Self {
        Self {
            direction: CodecDirection::Encode,
            source,
        }
    }

    pub(crate) fn decode(source: serde_json::Error) -> Self {
        Self {
            direction: CodecDirection::Decode,
            source,
        }
    }

    /// Which half of the codec failed.
    #[must_use]
    pub fn direction(&self) -> CodecDirection {
        self.direction
    }
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.direction {
            CodecDirection::Encode => f.write_str("Failed to encode resource collection"),
            CodecDirection::Decode => f.write_str("Failed to decode resource collection"),
        }
    }
}

impl core::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}
