//! Basic CSV, TSV, and %table output.
//!
//! Run with: cargo run --example simple

use tabline::{table, to_csv, to_table, to_tsv};

fn main() {
    let scores = table![
        ["name", "score", "passed"],
        ["alice", 92, true],
        ["bob", 61, false],
    ];

    println!("CSV:\n{}\n", to_csv(&scores));
    println!("TSV:\n{}\n", to_tsv(&scores));

    // The %table form is what a notebook display layer consumes.
    println!("Annotated:\n{}", to_table(&scores));
}
