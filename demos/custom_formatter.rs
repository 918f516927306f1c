//! Supplying a custom row formatter.
//!
//! Run with: cargo run --example custom_formatter

use tabline::{table, to_csv_with, to_delimited_with, Delimiter, FormatOptions};

fn main() {
    let t = table![["alice", 92], ["bob", 61]];

    // The formatter owns the whole line.
    let report = to_csv_with(&t, |row| {
        format!(
            "{} scored {}",
            row.get(0).map(|v| v.to_string()).unwrap_or_default(),
            row.get(1).map(|v| v.to_string()).unwrap_or_default(),
        )
    });
    println!("{}\n", report);

    // Formatters may carry state across rows.
    let mut line = 0;
    let numbered = to_delimited_with(
        &t,
        FormatOptions::new().with_delimiter(Delimiter::Pipe),
        |row| {
            line += 1;
            format!(
                "{:>3}  {}",
                line,
                row.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" | ")
            )
        },
    );
    println!("{}", numbered);
}
