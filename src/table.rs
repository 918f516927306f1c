//! Row and table containers.
//!
//! A [`Row`] is an ordered sequence of [`Value`] cells; a [`Table`] is an
//! ordered sequence of rows. Both are ephemeral, caller-owned containers:
//! insertion order is significant (it is preserved in every output format)
//! and there is no uniqueness constraint on rows or cells.
//!
//! ## Examples
//!
//! ```rust
//! use tabline::{table, to_csv, Row, Table, Value};
//!
//! // Build incrementally
//! let mut t = Table::new();
//! t.push(Row::from(vec![Value::from("a"), Value::from(1)]));
//!
//! // Or with the macro
//! let t = table![["a", 1], ["b", 2]];
//! assert_eq!(to_csv(&t), "a,1\nb,2");
//! ```

use crate::Value;
use serde::{Deserialize, Serialize};

/// One record: an ordered sequence of scalar cells.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<Value>);

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Row(Vec::new())
    }

    /// Appends a cell to the row.
    pub fn push(&mut self, cell: impl Into<Value>) {
        self.0.push(cell.into());
    }

    /// Returns the number of cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the cell at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Returns an iterator over the cells, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Returns the cells as a slice.
    #[must_use]
    pub fn cells(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Row {
    fn from(cells: Vec<Value>) -> Self {
        Row(cells)
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Row(Vec::from_iter(iter))
    }
}

impl IntoIterator for Row {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An ordered sequence of [`Row`]s.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table(Vec<Row>);

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Table(Vec::new())
    }

    /// Creates an empty table with the specified row capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Table(Vec::with_capacity(capacity))
    }

    /// Appends a row to the table.
    pub fn push(&mut self, row: Row) {
        self.0.push(row);
    }

    /// Returns the number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the row at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.0.get(index)
    }

    /// Returns an iterator over the rows, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.0.iter()
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.0
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Table(rows)
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Table(Vec::from_iter(iter))
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut table = Table::new();
        let mut row = Row::new();
        row.push("first");
        row.push(2);
        table.push(row);
        table.push(Row::from(vec![Value::from("second")]));

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get(0).and_then(|r| r.get(0)).and_then(|v| v.as_str()),
            Some("first")
        );
        assert_eq!(table.get(1).map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let mut table = Table::with_capacity(16);
        assert!(table.is_empty());
        table.push(Row::from(vec![Value::from(1)]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_duplicate_rows_allowed() {
        let row = Row::from(vec![Value::from("x")]);
        let table = Table::from(vec![row.clone(), row.clone()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0), table.get(1));
    }
}
