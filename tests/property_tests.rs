//! Property-based tests for the formatting and JSON round-trip guarantees.
//!
//! These complement the integration tests by checking the structural laws
//! across generated tables of scalars.

use proptest::prelude::*;
use tabline::{
    from_json, to_csv, to_csv_with, to_delimited, to_json, to_table, to_tsv, FormatOptions, Row,
    Table, Value,
};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        prop::num::f64::NORMAL.prop_map(Value::from),
        // no line terminators so line-count properties stay meaningful
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(|s| Value::from(s)),
    ]
}

fn row() -> impl Strategy<Value = Row> {
    prop::collection::vec(scalar(), 0..6).prop_map(Row::from)
}

fn tables() -> impl Strategy<Value = Table> {
    prop::collection::vec(row(), 0..8).prop_map(Table::from)
}

proptest! {
    // Round-trip law: encode to JSON, decode, compare.
    #[test]
    fn prop_json_round_trip(t in tables()) {
        let text = to_json(&t).unwrap();
        let back: Table = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(&t, &back);

        // The dynamic decode path must accept the same text.
        prop_assert!(from_json(&text).is_ok());
    }

    // One line per row, joined (not terminated): n rows produce n-1
    // terminators when no cell contains one.
    #[test]
    fn prop_line_count(t in tables()) {
        let out = to_csv(&t);
        if t.is_empty() {
            prop_assert_eq!(out, "");
        } else {
            prop_assert_eq!(out.split('\n').count(), t.len());
        }
    }

    // The TSV wrapper is exactly the core formatter specialized to tabs.
    #[test]
    fn prop_tsv_is_tab_delimited(t in tables()) {
        prop_assert_eq!(to_tsv(&t), to_delimited(&t, FormatOptions::tsv()));
    }

    // The %table annotation is a fixed prefix over TSV.
    #[test]
    fn prop_table_annotation_prefix(t in tables()) {
        let annotated = to_table(&t);
        prop_assert!(annotated.starts_with("%table "));
        prop_assert_eq!(&annotated["%table ".len()..], to_tsv(&t));
    }

    // A constant formatter shows the engine applies it once per row.
    #[test]
    fn prop_formatter_applied_per_row(t in tables()) {
        let out = to_csv_with(&t, |_| "x".to_string());
        let expected = vec!["x"; t.len()].join("\n");
        prop_assert_eq!(out, expected);
    }
}
