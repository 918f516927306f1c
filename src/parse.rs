//! Declared-but-unimplemented inverse parsers.
//!
//! The API declares inverses for the CSV and `%table` encoders, but no
//! parsing exists. That gap is an explicit contract: both functions always
//! return [`Error::NotImplemented`](crate::Error::NotImplemented) rather
//! than silently returning an empty table, so callers cannot mistake the
//! gap for "the input had no rows".

use crate::{Error, Result, Table};

/// Inverse of [`to_csv`](crate::to_csv). Not implemented.
///
/// # Errors
///
/// Always returns [`Error::NotImplemented`](crate::Error::NotImplemented).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_csv(_text: &str) -> Result<Table> {
    Err(Error::not_implemented("CSV parsing (from_csv)"))
}

/// Inverse of [`to_table`](crate::to_table). Not implemented.
///
/// # Errors
///
/// Always returns [`Error::NotImplemented`](crate::Error::NotImplemented).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_table(_text: &str) -> Result<Table> {
    Err(Error::not_implemented("%table parsing (from_table)"))
}
