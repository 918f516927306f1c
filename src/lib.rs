//! # tabline
//!
//! Small, stateless helpers that turn a table of scalar values into
//! delimiter-separated text (CSV/TSV), a notebook-style `"%table "` annotated
//! string, or JSON, plus a JSON-decoding wrapper that yields ordered dynamic
//! values.
//!
//! ## What it is
//!
//! The core is deliberately tiny: produce one line per row (either by joining
//! the row's cells with a delimiter, or via a caller-supplied row formatter)
//! and join the lines with a line terminator. Everything else is a thin
//! specialization of that.
//!
//! This is **not** a CSV/TSV parser — the inverse functions exist as explicit
//! `NotImplemented` stubs — and it performs **no escaping or quoting**: cells
//! containing the delimiter or line terminator are emitted verbatim. That
//! limitation is part of the output contract and is kept on purpose.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabline::{table, to_csv, to_tsv, to_table};
//!
//! let t = table![["name", "score"], ["alice", 10], ["bob", 7]];
//!
//! assert_eq!(to_csv(&t), "name,score\nalice,10\nbob,7");
//! assert_eq!(to_tsv(&t), "name\tscore\nalice\t10\nbob\t7");
//! assert_eq!(to_table(&t), "%table name\tscore\nalice\t10\nbob\t7");
//! ```
//!
//! ### Custom row formatters
//!
//! ```rust
//! use tabline::{table, to_csv_with};
//!
//! let t = table![["a", "b"]];
//! let out = to_csv_with(&t, |row| {
//!     format!("{}-{}", row.get(0).unwrap(), row.get(1).unwrap())
//! });
//! assert_eq!(out, "a-b");
//! ```
//!
//! ### JSON
//!
//! ```rust
//! use tabline::{table, to_json, from_json};
//!
//! let t = table![["x", 1]];
//! let text = to_json(&t).unwrap();
//! let back = from_json(&text).unwrap();
//! assert!(back.is_array());
//! ```
//!
//! ## Concurrency
//!
//! Every function is synchronous and side-effect free: it reads its arguments
//! and allocates its output. All of them are safely callable from multiple
//! threads with no coordination.

pub mod error;
pub mod json;
pub mod macros;
pub mod map;
pub mod options;
pub mod parse;
pub mod ser;
pub mod table;
pub mod value;

pub use error::{Error, Result};
pub use json::{from_json, from_json_reader, from_json_slice, to_json, to_json_pretty};
pub use map::ValueMap;
pub use options::{Delimiter, FormatOptions};
pub use parse::{from_csv, from_table};
pub use table::{Row, Table};
pub use value::{Number, Value};

/// The fixed prefix of the `%table` annotation format, signaling "render as
/// table" to a downstream notebook display layer.
pub const TABLE_MARKER: &str = "%table ";

/// Formats a table as delimited text with the given options, joining each
/// row's cells with the delimiter and the lines with the line terminator.
///
/// # Examples
///
/// ```rust
/// use tabline::{table, to_delimited, Delimiter, FormatOptions};
///
/// let t = table![["a", "b"], ["c", "d"]];
/// let options = FormatOptions::new().with_delimiter(Delimiter::Pipe);
/// assert_eq!(to_delimited(&t, options), "a|b\nc|d");
/// ```
#[must_use]
pub fn to_delimited(table: &Table, options: FormatOptions) -> String {
    ser::format_rows(table, &options)
}

/// Formats a table with the given options and a caller-supplied row
/// formatter. The formatter produces each line; the line terminator joins
/// them.
#[must_use]
pub fn to_delimited_with<F>(table: &Table, options: FormatOptions, formatter: F) -> String
where
    F: FnMut(&Row) -> String,
{
    ser::format_rows_with(table, &options, formatter)
}

/// Formats a table as comma-separated text, one line per row.
///
/// An empty table yields the empty string.
///
/// # Examples
///
/// ```rust
/// use tabline::{table, to_csv, Table};
///
/// assert_eq!(to_csv(&Table::new()), "");
/// assert_eq!(to_csv(&table![["a", "b"], ["c", "d"]]), "a,b\nc,d");
/// ```
#[must_use]
pub fn to_csv(table: &Table) -> String {
    ser::format_rows(table, &FormatOptions::csv())
}

/// Formats a table as comma-separated text with a custom row formatter.
///
/// # Examples
///
/// ```rust
/// use tabline::{table, to_csv_with};
///
/// let t = table![["a", "b"]];
/// assert_eq!(to_csv_with(&t, |row| row.len().to_string()), "2");
/// ```
#[must_use]
pub fn to_csv_with<F>(table: &Table, formatter: F) -> String
where
    F: FnMut(&Row) -> String,
{
    ser::format_rows_with(table, &FormatOptions::csv(), formatter)
}

/// Formats a table as tab-separated text, one line per row.
///
/// # Examples
///
/// ```rust
/// use tabline::{table, to_tsv};
///
/// assert_eq!(to_tsv(&table![["a", "b"], ["c", "d"]]), "a\tb\nc\td");
/// ```
#[must_use]
pub fn to_tsv(table: &Table) -> String {
    ser::format_rows(table, &FormatOptions::tsv())
}

/// Formats a table as tab-separated text with a custom row formatter.
#[must_use]
pub fn to_tsv_with<F>(table: &Table, formatter: F) -> String
where
    F: FnMut(&Row) -> String,
{
    ser::format_rows_with(table, &FormatOptions::tsv(), formatter)
}

/// Formats a table as a `%table` annotation: the literal [`TABLE_MARKER`]
/// prefix followed by the TSV rendering. Fixed format, no configuration.
///
/// # Examples
///
/// ```rust
/// use tabline::{table, to_table};
///
/// assert_eq!(to_table(&table![["x"]]), "%table x");
/// ```
#[must_use]
pub fn to_table(table: &Table) -> String {
    format!("{}{}", TABLE_MARKER, to_tsv(table))
}
