//! Building tables at runtime and moving them through JSON.
//!
//! Run with: cargo run --example dynamic_tables

use std::error::Error;
use tabline::{from_json, to_csv, to_json_pretty, Row, Table};

fn main() -> Result<(), Box<dyn Error>> {
    // Rows built cell by cell, e.g. from query results.
    let mut readings = Table::new();
    for (sensor, value) in [("t-01", 21.4), ("t-02", 19.8), ("t-03", 22.1)] {
        let mut row = Row::new();
        row.push(sensor);
        row.push(value);
        readings.push(row);
    }

    println!("CSV:\n{}\n", to_csv(&readings));

    // Encode for transport, decode into a dynamic value tree.
    let json = to_json_pretty(&readings)?;
    println!("JSON:\n{}\n", json);

    let decoded = from_json(&json)?;
    let rows = decoded.as_array().expect("table decodes as an array");
    println!("Decoded {} rows", rows.len());

    // Object keys keep their input order after decoding.
    let config = from_json(r#"{"zeta": 1, "alpha": 2}"#)?;
    let keys: Vec<_> = config.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
    println!("✓ Key order preserved: {:?}", keys);

    Ok(())
}
