use std::io;
use tabline::{
    from_csv, from_json, from_json_reader, from_json_slice, from_table, table, to_json,
    to_json_pretty, Error, Number, Table, Value, ValueMap,
};

#[test]
fn test_table_encodes_as_array_of_arrays() {
    let t = table![["a", "b"], ["c", "d"]];
    assert_eq!(to_json(&t).unwrap(), r#"[["a","b"],["c","d"]]"#);
}

#[test]
fn test_empty_table_encodes_as_empty_array() {
    assert_eq!(to_json(&Table::new()).unwrap(), "[]");
}

#[test]
fn test_array_of_maps_encodes_as_is() {
    // The encoder takes the value as-is; array-of-objects input stays
    // array-of-objects.
    let mut row = ValueMap::new();
    row.insert("name".to_string(), Value::from("alice"));
    row.insert("score".to_string(), Value::from(10));
    let data = Value::Array(vec![Value::Object(row)]);

    assert_eq!(
        to_json(&data).unwrap(),
        r#"[{"name":"alice","score":10}]"#
    );
}

#[test]
fn test_json_round_trip_of_scalar_table() {
    let t = table![["a", 1, true], ["b", 2.5, false]];
    let text = to_json(&t).unwrap();
    let back: Table = serde_json::from_str(&text).unwrap();
    assert_eq!(t, back);
}

#[test]
fn test_decode_produces_dynamic_value() {
    let value = from_json(r#"[["a",1],["b",2]]"#).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].as_array().unwrap()[1],
        Value::Number(Number::Integer(1))
    );
}

#[test]
fn test_decoded_objects_preserve_key_order() {
    let value = from_json(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let obj = value.as_object().unwrap();
    let keys: Vec<_> = obj.keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_key_order_survives_reencode() {
    let text = r#"{"zeta":1,"alpha":2}"#;
    let value = from_json(text).unwrap();
    assert_eq!(to_json(&value).unwrap(), text);
}

#[test]
fn test_invalid_json_fails_with_parse_error() {
    let err = from_json("not json").unwrap_err();
    match err {
        Error::Parse { line, .. } => assert_eq!(line, 1),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_error_reports_position() {
    let err = from_json("[1,\n2,\n!]").unwrap_err();
    match err {
        Error::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_from_json_slice() {
    let value = from_json_slice(br#"{"k": "v"}"#).unwrap();
    assert_eq!(
        value.as_object().and_then(|o| o.get("k")).and_then(|v| v.as_str()),
        Some("v")
    );
}

#[test]
fn test_from_json_reader_round_trip() {
    let value = from_json_reader(io::Cursor::new(br#"{"k": [1, 2]}"#)).unwrap();
    assert_eq!(
        value
            .as_object()
            .and_then(|o| o.get("k"))
            .and_then(|v| v.as_array())
            .map(|a| a.len()),
        Some(2)
    );
}

struct BrokenReader;

impl io::Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "pipe closed"))
    }
}

#[test]
fn test_failing_reader_is_io_error() {
    let err = from_json_reader(BrokenReader).unwrap_err();
    match err {
        Error::Io(msg) => assert!(msg.contains("pipe closed")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_pretty_output_decodes_back() {
    let t = table![["a", 1]];
    let pretty = to_json_pretty(&t).unwrap();
    assert!(pretty.contains('\n'));
    let back: Table = serde_json::from_str(&pretty).unwrap();
    assert_eq!(t, back);
}

#[test]
fn test_inverse_parsers_signal_not_implemented() {
    let err = from_csv("a,b\nc,d").unwrap_err();
    assert!(matches!(err, Error::NotImplemented(_)));
    assert!(err.to_string().contains("not implemented"));

    let err = from_table("%table a\tb").unwrap_err();
    assert!(matches!(err, Error::NotImplemented(_)));
}
