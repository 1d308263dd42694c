//! Converting collections to and from bytes.
//!
//! [`encode`] and [`decode`] are plain functions over a self-describing JSON
//! form: an array of `[key, value]` pairs in storage order, where an integer
//! key is a JSON number and a string key is a JSON string.
//!
//! ```
//! use rescoll::{ResourceCollection, codec};
//!
//! let mut resources = ResourceCollection::from(vec!["a", "b"]);
//! resources.set("name", "c");
//!
//! let bytes = codec::encode(&resources).unwrap();
//! assert_eq!(bytes, br#"[[0,"a"],[1,"b"],["name","c"]]"#);
//!
//! let decoded: ResourceCollection<String> = codec::decode(&bytes).unwrap();
//! assert_eq!(decoded.get("name").map(String::as_str), Ok("c"));
//! ```
//!
//! The same shape is used by the [`serde`] implementations of
//! [`ResourceCollection`], so a collection can be nested in any other serde
//! document. Decoding does not restore the cursor: a decoded collection always
//! starts with its cursor on the first entry. Repeated keys in the input
//! overwrite earlier values in place, the same way [`bulk`] does.
//!
//! [`bulk`]: ResourceCollection::bulk

use alloc::vec::Vec;
use core::marker::PhantomData;

use rescoll_internals::RawStore;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{DeserializeOwned, SeqAccess, Visitor},
};

use crate::{CodecError, ResourceCollection, ResourceKey};

/// Upper bound on the capacity reserved from an untrusted length hint.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

/// Encodes `resources` into bytes.
///
/// # Errors
///
/// Returns a [`CodecError`] if a value fails to serialize.
pub fn encode<V>(resources: &ResourceCollection<V>) -> Result<Vec<u8>, CodecError>
where
    V: Serialize,
{
    serde_json::to_vec(resources).map_err(CodecError::encode)
}

/// Decodes a collection previously produced by [`encode`].
///
/// # Errors
///
/// Returns a [`CodecError`] if `bytes` is not an array of `[key, value]`
/// pairs, a key is neither an integer nor a string, or a value fails to
/// deserialize.
pub fn decode<V>(bytes: &[u8]) -> Result<ResourceCollection<V>, CodecError>
where
    V: DeserializeOwned,
{
    let resources: ResourceCollection<V> =
        serde_json::from_slice(bytes).map_err(CodecError::decode)?;
    tracing::trace!(entries = resources.len(), "decoded resource collection");
    Ok(resources)
}

impl<V> Serialize for ResourceCollection<V>
where
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_raw().iter())
    }
}

impl<'de, V> Deserialize<'de> for ResourceCollection<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(CollectionVisitor(PhantomData))
    }
}

/// Rebuilds the store entry by entry.
struct CollectionVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for CollectionVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = ResourceCollection<V>;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a sequence of [key, value] pairs")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_ENTRIES);
        let mut store = RawStore::with_capacity(capacity);
        while let Some((key, value)) = seq.next_element::<(ResourceKey, V)>()? {
            store.insert(key, value);
        }
        Ok(ResourceCollection::from_raw(store))
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    use serde_json::{Value, json};

    use super::*;
    use crate::CodecDirection;

    #[test]
    fn test_round_trip_keeps_keys_values_and_order() {
        let mut resources = ResourceCollection::new();
        resources.push(json!(null));
        resources.set("name", json!({ "nested": [1, 2] }));
        resources.set(-4, json!("negative"));
        resources.set(10, json!(1.5));
        resources.push(json!(true));

        let decoded: ResourceCollection<Value> = decode(&encode(&resources).unwrap()).unwrap();

        assert_eq!(decoded, resources);
        assert_eq!(decoded.len(), resources.len());
        assert_eq!(decoded.fetch_all(), resources.fetch_all());
    }

    #[test]
    fn test_decode_resets_cursor_and_append_mark() {
        let mut resources = ResourceCollection::from(vec![1, 2, 3]);
        resources.set(7, 8);
        resources.advance();
        resources.advance();

        let mut decoded: ResourceCollection<i32> = decode(&encode(&resources).unwrap()).unwrap();
        assert_eq!(decoded.key(), Some(&ResourceKey::Index(0)));

        decoded.push(9);
        assert_eq!(decoded.get(8), Ok(&9));
    }

    #[test]
    fn test_empty_round_trip() {
        let resources: ResourceCollection<String> = ResourceCollection::new();
        let bytes = encode(&resources).unwrap();
        assert_eq!(bytes, b"[]");
        assert!(decode::<String>(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_decode_repeated_key_overwrites_in_place() {
        let decoded: ResourceCollection<u8> = decode(br#"[["a",1],[0,2],["a",3]]"#).unwrap();
        let keys: Vec<_> = decoded.keys().cloned().collect();
        assert_eq!(keys, [ResourceKey::from("a"), ResourceKey::Index(0)]);
        assert_eq!(decoded.fetch_all(), [&3, &2]);
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        for input in [
            &br#"{"a":1}"#[..],
            br#"[[1.5,"x"]]"#,
            br#"[[null,"x"]]"#,
            br#"[[0]]"#,
            br#"[[0,"x"]"#,
        ] {
            let error = decode::<String>(input).unwrap_err();
            assert_eq!(error.direction(), CodecDirection::Decode);
            assert!(error.to_string().starts_with("Failed to decode resource collection"));
        }
    }

    #[test]
    fn test_nested_in_other_documents() {
        let resources = ResourceCollection::from_entries([("x", 1), ("y", 2)]);
        let document = json!({ "resources": resources });
        assert_eq!(document, json!({ "resources": [["x", 1], ["y", 2]] }));
    }
}
