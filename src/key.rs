//! Keys of a [`ResourceCollection`](crate::ResourceCollection).
//!
//! A [`ResourceKey`] is either an integer index or a string name. Integer keys
//! are the ones that [`push`](crate::ResourceCollection::push) hands out and
//! that get compacted after a [`delete`](crate::ResourceCollection::delete);
//! names are never renumbered.
//!
//! Most collection methods accept `impl Into<ResourceKey>`, so plain integers
//! and strings can be passed directly:
//!
//! ```
//! use rescoll::{ResourceCollection, ResourceKey};
//!
//! let mut resources = ResourceCollection::new();
//! resources.set("name", "value");
//! resources.set(3, "three");
//!
//! assert!(resources.exists("name"));
//! assert!(resources.exists(ResourceKey::Index(3)));
//! ```

use alloc::string::{String, ToString};

use rescoll_internals::StoreKey;

/// A key in a resource collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKey {
    /// An integer key. Keys assigned by `push` are always of this kind.
    Index(i64),
    /// A string key. Never renumbered.
    Name(String),
}

impl ResourceKey {
    /// Returns `true` if this is an integer key.
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, ResourceKey::Index(_))
    }

    /// Returns the integer value of an [`Index`](Self::Index) key.
    #[must_use]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            ResourceKey::Index(index) => Some(*index),
            ResourceKey::Name(_) => None,
        }
    }

    /// Returns the string of a [`Name`](Self::Name) key.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            ResourceKey::Index(_) => None,
            ResourceKey::Name(name) => Some(name),
        }
    }
}

impl StoreKey for ResourceKey {
    fn as_index(&self) -> Option<i64> {
        ResourceKey::as_index(self)
    }

    fn from_index(index: i64) -> Self {
        ResourceKey::Index(index)
    }
}

impl core::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ResourceKey::Index(index) => core::fmt::Display::fmt(index, f),
            ResourceKey::Name(name) => core::fmt::Display::fmt(name, f),
        }
    }
}

macro_rules! from_lossless_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl From<$int> for ResourceKey {
                fn from(index: $int) -> Self {
                    ResourceKey::Index(i64::from(index))
                }
            }
        )*
    };
}

from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for ResourceKey {
    /// Positions beyond `i64::MAX` saturate.
    fn from(position: usize) -> Self {
        ResourceKey::Index(i64::try_from(position).unwrap_or(i64::MAX))
    }
}

impl From<&str> for ResourceKey {
    fn from(name: &str) -> Self {
        ResourceKey::Name(name.to_string())
    }
}

impl From<String> for ResourceKey {
    fn from(name: String) -> Self {
        ResourceKey::Name(name)
    }
}

impl From<&String> for ResourceKey {
    fn from(name: &String) -> Self {
        ResourceKey::Name(name.clone())
    }
}

impl From<&ResourceKey> for ResourceKey {
    fn from(key: &ResourceKey) -> Self {
        key.clone()
    }
}

impl serde::Serialize for ResourceKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ResourceKey::Index(index) => serializer.serialize_i64(*index),
            ResourceKey::Name(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> serde::Deserialize<'de> for ResourceKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Accepts an integer or a string, nothing else.
struct KeyVisitor;

impl<'de> serde::de::Visitor<'de> for KeyVisitor {
    type Value = ResourceKey;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("an integer or a string resource key")
    }

    fn visit_i64<E>(self, index: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(ResourceKey::Index(index))
    }

    fn visit_u64<E>(self, index: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(index)
            .map(ResourceKey::Index)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(index), &self))
    }

    fn visit_str<E>(self, name: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(ResourceKey::from(name))
    }

    fn visit_string<E>(self, name: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(ResourceKey::Name(name))
    }
}
