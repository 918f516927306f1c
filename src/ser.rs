//! The row formatter: table to delimited text.
//!
//! The whole engine is: produce one line per row, then join the lines with
//! the configured line terminator. A line is either the row's cells joined
//! with the configured delimiter (default) or whatever a caller-supplied
//! row formatter returns.
//!
//! No escaping, quoting, or delimiter-collision handling is performed. Cells
//! containing the delimiter or the line terminator are emitted verbatim.
//! This is a known limitation kept for output compatibility, not a defect.
//!
//! ## Examples
//!
//! ```rust
//! use tabline::ser::{format_rows, format_rows_with};
//! use tabline::{table, FormatOptions};
//!
//! let t = table![["a", "b"], ["c", "d"]];
//! assert_eq!(format_rows(&t, &FormatOptions::new()), "a,b\nc,d");
//!
//! // Custom row formatter owns line production
//! let joined = format_rows_with(&t, &FormatOptions::new(), |row| {
//!     format!("{}-{}", row.get(0).unwrap(), row.get(1).unwrap())
//! });
//! assert_eq!(joined, "a-b\nc-d");
//! ```

use crate::{FormatOptions, Row, Table};

/// Formats a table as delimited text using the default row formatter:
/// each row's cells are converted to text and joined with the delimiter.
///
/// An empty table yields the empty string; a row with zero cells yields an
/// empty line.
///
/// # Examples
///
/// ```rust
/// use tabline::ser::format_rows;
/// use tabline::{table, FormatOptions, Table};
///
/// assert_eq!(format_rows(&Table::new(), &FormatOptions::new()), "");
/// assert_eq!(
///     format_rows(&table![["a", "b"], ["c", "d"]], &FormatOptions::new()),
///     "a,b\nc,d"
/// );
/// ```
#[must_use]
pub fn format_rows(table: &Table, options: &FormatOptions) -> String {
    let delimiter = options.delimiter.as_str();
    format_rows_with(table, options, |row| default_line(row, delimiter))
}

/// Formats a table as delimited text, producing each line with the supplied
/// row formatter and joining lines with the configured line terminator.
///
/// The formatter fully owns line production; the delimiter in `options` is
/// not consulted here.
#[must_use]
pub fn format_rows_with<F>(table: &Table, options: &FormatOptions, mut formatter: F) -> String
where
    F: FnMut(&Row) -> String,
{
    let lines: Vec<String> = table.iter().map(|row| formatter(row)).collect();
    lines.join(&options.line_terminator)
}

/// The default line: cell text joined with the delimiter, verbatim.
fn default_line(row: &Row, delimiter: &str) -> String {
    row.iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}
