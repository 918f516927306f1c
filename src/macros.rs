/// Builds a [`Row`](crate::Row) from cell expressions.
///
/// Each cell expression must convert into a [`Value`](crate::Value) via
/// `From`.
///
/// # Examples
///
/// ```rust
/// use tabline::{row, Value};
///
/// let r = row!["alice", 30, true];
/// assert_eq!(r.len(), 3);
/// assert_eq!(r.get(0), Some(&Value::from("alice")));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };

    ( $($cell:expr),+ $(,)? ) => {
        $crate::Row::from(vec![ $($crate::Value::from($cell)),+ ])
    };
}

/// Builds a [`Table`](crate::Table) from bracketed rows of cell expressions.
///
/// # Examples
///
/// ```rust
/// use tabline::{table, to_csv};
///
/// let t = table![
///     ["id", "name"],
///     [1, "alice"],
///     [2, "bob"],
/// ];
/// assert_eq!(to_csv(&t), "id,name\n1,alice\n2,bob");
/// ```
#[macro_export]
macro_rules! table {
    () => {
        $crate::Table::new()
    };

    ( $([ $($cell:expr),* $(,)? ]),+ $(,)? ) => {
        $crate::Table::from(vec![ $($crate::row![ $($cell),* ]),+ ])
    };
}
