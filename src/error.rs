//! Error types for the JSON codec wrappers and the unimplemented parsers.
//!
//! The formatting functions in this crate are total and return plain
//! `String`s; only two things can fail:
//!
//! - **JSON decoding**: malformed input produces [`Error::Parse`] with the
//!   line/column position reported by the underlying codec.
//! - **Inverse parsers**: [`from_csv`](crate::from_csv) and
//!   [`from_table`](crate::from_table) are declared but intentionally not
//!   implemented, and always return [`Error::NotImplemented`].
//!
//! ## Examples
//!
//! ```rust
//! use tabline::{from_json, Error};
//!
//! let result = from_json("not json");
//! assert!(matches!(result, Err(Error::Parse { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors this crate can produce.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Input text was not well-formed JSON.
    #[error("JSON parse error at line {line}, column {col}: {msg}")]
    Parse {
        line: usize,
        col: usize,
        msg: String,
    },

    /// The operation is declared by the API contract but has no
    /// implementation.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// IO error while reading input for decoding.
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error with a display message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabline::Error;
    ///
    /// let err = Error::parse(3, 14, "expected value");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn parse(line: usize, col: usize, msg: &str) -> Self {
        Error::Parse {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a not-implemented error naming the missing operation.
    pub fn not_implemented(what: &'static str) -> Self {
        Error::NotImplemented(what)
    }

    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabline::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse {
            line: err.line(),
            col: err.column(),
            msg: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
