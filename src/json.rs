//! JSON codec wrappers.
//!
//! Encoding and decoding are straight delegations to `serde_json`; this crate
//! adds no custom JSON formatting. Decoding lands in [`Value`], whose objects
//! are insertion-ordered [`ValueMap`](crate::ValueMap)s, so key order in the
//! input text is preserved.
//!
//! ## Examples
//!
//! ```rust
//! use tabline::{table, to_json, from_json};
//!
//! let t = table![["a", 1], ["b", 2]];
//! let text = to_json(&t).unwrap();
//! assert_eq!(text, r#"[["a",1],["b",2]]"#);
//!
//! let value = from_json(&text).unwrap();
//! assert!(value.is_array());
//! ```

use crate::{Error, Result, Value};
use serde::Serialize;
use std::io;

/// Encodes any `T: Serialize` as compact JSON text.
///
/// The value is encoded as-is: a [`Table`](crate::Table) becomes an array of
/// arrays, a sequence of maps becomes an array of objects, and so on.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded (e.g. a map with
/// non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value).map_err(Error::from)
}

/// Encodes any `T: Serialize` as pretty-printed JSON text.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string_pretty(value).map_err(Error::from)
}

/// Decodes JSON text into a dynamic [`Value`].
///
/// Objects decode as insertion-ordered string-keyed maps, not opaque records.
///
/// # Examples
///
/// ```rust
/// use tabline::from_json;
///
/// let value = from_json(r#"{"b": 1, "a": 2}"#).unwrap();
/// let obj = value.as_object().unwrap();
/// let keys: Vec<_> = obj.keys().cloned().collect();
/// assert_eq!(keys, vec!["b", "a"]); // input order preserved
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] with line/column information when `text` is not
/// well-formed JSON. The error is propagated, never replaced with a default
/// value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(Error::from)
}

/// Decodes JSON bytes into a dynamic [`Value`].
///
/// # Errors
///
/// Returns [`Error::Parse`] when the bytes are not valid UTF-8 JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_slice(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(Error::from)
}

/// Decodes JSON from an I/O stream into a dynamic [`Value`].
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or [`Error::Parse`] if the stream
/// contents are not well-formed JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_json(&text)
}
