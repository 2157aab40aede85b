//! Printer output matrix: layout, escaping and malformed UTF-8 handling.

use json_value::{to_pretty_bytes, to_pretty_string, write_pretty_with, PrettyOptions, Value};
use serde_json::json;

fn bytes(s: &[u8]) -> Vec<u8> {
    to_pretty_bytes(&Value::from(s))
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn empty_containers_have_no_whitespace() {
    assert_eq!(to_pretty_string(&Value::from(json!([]))), "[]");
    assert_eq!(to_pretty_string(&Value::from(json!({}))), "{}");
}

#[test]
fn object_with_array_value() {
    let v = Value::from(json!({"k": [1, 2]}));
    assert_eq!(to_pretty_string(&v), "{\n  \"k\": [\n    1,\n    2\n  ]\n}");
}

#[test]
fn deep_nesting_indents_two_per_level() {
    let v = Value::from(json!([[["x"]]]));
    assert_eq!(
        to_pretty_string(&v),
        "[\n  [\n    [\n      \"x\"\n    ]\n  ]\n]"
    );
}

#[test]
fn object_entries_in_any_order() {
    let v = Value::from(json!({"a": 1, "b": true}));
    let out = to_pretty_string(&v);
    let a_first = "{\n  \"a\": 1,\n  \"b\": true\n}";
    let b_first = "{\n  \"b\": true,\n  \"a\": 1\n}";
    assert!(out == a_first || out == b_first, "unexpected output: {out}");
}

#[test]
fn no_trailing_newline() {
    let v = Value::from(json!({"a": [1]}));
    assert!(!to_pretty_string(&v).ends_with('\n'));
}

#[test]
fn numbers_use_shortest_decimal_form() {
    assert_eq!(to_pretty_string(&Value::from(0)), "0");
    assert_eq!(to_pretty_string(&Value::from(-17)), "-17");
    assert_eq!(to_pretty_string(&Value::from(0.1)), "0.1");
    assert_eq!(to_pretty_string(&Value::from(1_000_000)), "1000000");
}

#[test]
fn starting_offset_shifts_inner_lines_only() {
    let v = Value::from(json!({"a": null}));
    let mut out = Vec::new();
    write_pretty_with(&mut out, &v, 2, &PrettyOptions::default()).unwrap();
    assert_eq!(out, b"{\n    \"a\": null\n  }");
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

#[test]
fn quote_and_tab() {
    assert_eq!(to_pretty_string(&Value::from("\"\t")), "\"\\\"\\t\"");
}

#[test]
fn every_control_byte_is_escaped() {
    for byte in 0u8..0x20 {
        let out = bytes(&[byte]);
        let expected: Vec<u8> = match byte {
            0x08 => b"\"\\b\"".to_vec(),
            0x09 => b"\"\\t\"".to_vec(),
            0x0A => b"\"\\n\"".to_vec(),
            0x0C => b"\"\\f\"".to_vec(),
            0x0D => b"\"\\r\"".to_vec(),
            _ => format!("\"\\u{byte:04x}\"").into_bytes(),
        };
        assert_eq!(out, expected, "byte {byte:#04x}");
    }
    assert_eq!(bytes(&[0x7F]), b"\"\\u007f\"");
}

#[test]
fn printable_ascii_passes_through() {
    let printable: Vec<u8> = (0x20u8..0x7F).filter(|b| *b != b'"' && *b != b'\\').collect();
    let mut expected = vec![b'"'];
    expected.extend_from_slice(&printable);
    expected.push(b'"');
    assert_eq!(bytes(&printable), expected);
}

// ---------------------------------------------------------------------------
// UTF-8
// ---------------------------------------------------------------------------

#[test]
fn valid_sequences_of_each_width() {
    assert_eq!(to_pretty_string(&Value::from("\u{e9}")), "\"\u{e9}\"");
    assert_eq!(to_pretty_string(&Value::from("\u{65e5}")), "\"\u{65e5}\"");
    assert_eq!(to_pretty_string(&Value::from("\u{1f600}")), "\"\u{1f600}\"");
}

#[test]
fn c1_range_inside_multibyte_is_not_escaped() {
    // U+0085 encodes as C2 85
    assert_eq!(bytes("\u{85}".as_bytes()), b"\"\xC2\x85\"");
}

#[test]
fn lone_lead_byte_truncates() {
    assert_eq!(bytes(b"A\xC3"), b"\"A\"");
}

#[test]
fn bad_continuation_truncates_rest() {
    assert_eq!(bytes(b"ok\xE2\x82Xtail"), b"\"ok\"");
    assert_eq!(bytes(b"ok\xF0\x9F\x98Xtail"), b"\"ok\"");
}

#[test]
fn stray_continuation_truncates() {
    assert_eq!(bytes(b"\x80after"), b"\"\"");
}

#[test]
fn truncation_is_local_to_one_string() {
    let mut v = Value::default();
    v.entry("bad").set(&b"x\xC3"[..]);
    v.entry("good").set("y");
    assert_eq!(to_pretty_bytes(&v.get("bad")), b"\"x\"");
    assert_eq!(to_pretty_bytes(&v.get("good")), b"\"y\"");

    let arr: Value = [Value::from(&b"\xFF"[..]), Value::from("z")].into_iter().collect();
    assert_eq!(to_pretty_bytes(&arr), b"[\n  \"\",\n  \"z\"\n]");
}
