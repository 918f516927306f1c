//! Insertion-ordered map for decoded JSON objects.
//!
//! [`from_json`](crate::from_json) decodes JSON objects into [`ValueMap`]
//! rather than an opaque record or a hash map, so the key order of the input
//! text is observable and re-encoding reproduces it. That stability is what
//! the JSON round-trip law relies on: decode then encode is the identity on
//! well-formed object text.
//!
//! ```rust
//! use tabline::{from_json, to_json};
//!
//! let text = r#"{"sensor":"t-01","reading":21.4,"ok":true}"#;
//! let value = from_json(text).unwrap();
//!
//! // Keys come back in input order...
//! let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
//! assert_eq!(keys, vec!["sensor", "reading", "ok"]);
//!
//! // ...and re-encoding reproduces the original text.
//! assert_eq!(to_json(&value).unwrap(), text);
//! ```
//!
//! The wrapper delegates to [`IndexMap`]; only the read/insert surface the
//! decode path and callers need is exposed.

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to [`Value`](crate::Value)s.
///
/// This is what a decoded JSON object is: iteration, [`keys`](Self::keys),
/// and re-encoding all follow the order in which entries were inserted —
/// for decoded text, the order the keys appeared in the input.
///
/// # Examples
///
/// ```rust
/// use tabline::{Value, ValueMap};
///
/// let mut row = ValueMap::new();
/// row.insert("id".to_string(), Value::from(7));
/// row.insert("label".to_string(), Value::from("pump"));
///
/// assert_eq!(row.len(), 2);
/// assert_eq!(row.get("label").and_then(|v| v.as_str()), Some("pump"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap(IndexMap<String, crate::Value>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(IndexMap::new())
    }

    /// Inserts a key-value pair, keeping the key's first-insertion position.
    ///
    /// If the map already contained this key, the value is replaced and the
    /// old value returned; the key does not move.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for ValueMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        ValueMap(map.into_iter().collect())
    }
}

impl From<ValueMap> for HashMap<String, crate::Value> {
    fn from(map: ValueMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        ValueMap(IndexMap::from_iter(iter))
    }
}
