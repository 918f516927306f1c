use tabline::{
    table, to_csv, to_csv_with, to_delimited, to_delimited_with, to_table, to_tsv, to_tsv_with,
    Delimiter, FormatOptions, Row, Table, Value,
};

#[test]
fn test_empty_table_serializes_to_empty_string() {
    assert_eq!(to_csv(&Table::new()), "");
    assert_eq!(to_tsv(&Table::new()), "");
    assert_eq!(to_delimited(&Table::new(), FormatOptions::new()), "");
}

#[test]
fn test_csv_two_by_two() {
    let t = table![["a", "b"], ["c", "d"]];
    assert_eq!(to_csv(&t), "a,b\nc,d");
}

#[test]
fn test_tsv_two_by_two() {
    let t = table![["a", "b"], ["c", "d"]];
    assert_eq!(to_tsv(&t), "a\tb\nc\td");
}

#[test]
fn test_table_annotation_prefix() {
    assert_eq!(to_table(&table![["x"]]), "%table x");

    let t = table![["a", "b"], ["c", "d"]];
    assert_eq!(to_table(&t), "%table a\tb\nc\td");
}

#[test]
fn test_single_row_has_no_terminator() {
    assert_eq!(to_csv(&table![["a", "b"]]), "a,b");
}

#[test]
fn test_row_without_cells_is_empty_line() {
    let t = table![["a"], [], ["b"]];
    assert_eq!(to_csv(&t), "a\n\nb");
}

#[test]
fn test_scalar_coercion() {
    let t = table![[1, 2.5, true, false], ["text", -7]];
    assert_eq!(to_csv(&t), "1,2.5,true,false\ntext,-7");
}

#[test]
fn test_null_cell_renders_empty() {
    let t = Table::from(vec![Row::from(vec![
        Value::from("a"),
        Value::Null,
        Value::from("b"),
    ])]);
    assert_eq!(to_csv(&t), "a,,b");
}

#[test]
fn test_delimiter_collision_emitted_verbatim() {
    // Known limitation preserved for compatibility: no quoting, no escaping.
    let t = table![["a,b", "c"], ["line\nbreak", "d"]];
    assert_eq!(to_csv(&t), "a,b,c\nline\nbreak,d");
}

#[test]
fn test_custom_formatter_owns_the_line() {
    let t = table![["a", "b"]];
    let out = to_csv_with(&t, |row| {
        format!("{}-{}", row.get(0).unwrap(), row.get(1).unwrap())
    });
    assert_eq!(out, "a-b");
}

#[test]
fn test_custom_formatter_applies_per_row() {
    let t = table![["a", "b"], ["c", "d"]];
    let out = to_tsv_with(&t, |row| {
        row.iter()
            .map(|v| v.to_string().to_uppercase())
            .collect::<Vec<_>>()
            .join("|")
    });
    assert_eq!(out, "A|B\nC|D");
}

#[test]
fn test_stateful_formatter() {
    // FnMut: the formatter may carry state across rows.
    let t = table![["a"], ["b"], ["c"]];
    let mut line_no = 0usize;
    let out = to_csv_with(&t, |row| {
        line_no += 1;
        format!("{}:{}", line_no, row.get(0).unwrap())
    });
    assert_eq!(out, "1:a\n2:b\n3:c");
}

#[test]
fn test_custom_delimiter_and_line_terminator() {
    let t = table![["a", "b"], ["c", "d"]];
    let options = FormatOptions::new()
        .with_delimiter(Delimiter::Custom("; ".to_string()))
        .with_line_terminator("\r\n");
    assert_eq!(to_delimited(&t, options), "a; b\r\nc; d");
}

#[test]
fn test_pipe_delimiter() {
    let t = table![["a", "b"]];
    let options = FormatOptions::new().with_delimiter(Delimiter::Pipe);
    assert_eq!(to_delimited(&t, options), "a|b");
}

#[test]
fn test_delimited_with_formatter_uses_terminator_only() {
    let t = table![["a", "b"], ["c", "d"]];
    let options = FormatOptions::tsv().with_line_terminator(" | ");
    let out = to_delimited_with(&t, options, |row| row.len().to_string());
    assert_eq!(out, "2 | 2");
}
