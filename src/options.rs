//! Configuration options for delimited-text output.
//!
//! This module provides types to customize the row formatter:
//!
//! - [`FormatOptions`]: delimiter + line-terminator pair
//! - [`Delimiter`]: comma, tab, pipe, or any custom string
//!
//! ## Examples
//!
//! ```rust
//! use tabline::{table, to_delimited, Delimiter, FormatOptions};
//!
//! let t = table![["a", "b"], ["c", "d"]];
//!
//! // Semicolon-separated, CRLF-terminated
//! let options = FormatOptions::new()
//!     .with_delimiter(Delimiter::Custom(";".to_string()))
//!     .with_line_terminator("\r\n");
//! assert_eq!(to_delimited(&t, options), "a;b\r\nc;d");
//! ```

/// Delimiter choice for delimited-text output.
///
/// # Examples
///
/// ```rust
/// use tabline::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Pipe.as_str(), "|");
/// assert_eq!(Delimiter::Custom("; ".to_string()).as_str(), "; ");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Custom(String),
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
            Delimiter::Custom(s) => s,
        }
    }
}

/// Configuration for the row formatter: how cells are joined within a line
/// and how lines are joined into the final text blob.
///
/// # Examples
///
/// ```rust
/// use tabline::{Delimiter, FormatOptions};
///
/// // Default: comma-delimited, "\n"-terminated
/// let options = FormatOptions::new();
///
/// // TSV
/// let options = FormatOptions::tsv();
///
/// // Custom configuration
/// let options = FormatOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_line_terminator("\r\n");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FormatOptions {
    pub delimiter: Delimiter,
    pub line_terminator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            delimiter: Delimiter::default(),
            line_terminator: "\n".to_string(),
        }
    }
}

impl FormatOptions {
    /// Creates default options (comma delimiter, `"\n"` line terminator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates CSV options. Same as [`FormatOptions::new`]; spelled out for
    /// symmetry with [`FormatOptions::tsv`].
    #[must_use]
    pub fn csv() -> Self {
        Self::default()
    }

    /// Creates TSV options (tab delimiter, `"\n"` line terminator).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabline::{Delimiter, FormatOptions};
    ///
    /// let options = FormatOptions::tsv();
    /// assert_eq!(options.delimiter, Delimiter::Tab);
    /// ```
    #[must_use]
    pub fn tsv() -> Self {
        FormatOptions {
            delimiter: Delimiter::Tab,
            ..Default::default()
        }
    }

    /// Sets the delimiter used to join a row's cells.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the line terminator used to join produced lines.
    ///
    /// Note this joins lines rather than terminating each one: no trailing
    /// terminator is appended after the final row.
    #[must_use]
    pub fn with_line_terminator(mut self, line_terminator: impl Into<String>) -> Self {
        self.line_terminator = line_terminator.into();
        self
    }
}
