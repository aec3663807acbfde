use json_codec::{decode, encode, encode_pretty, JsonError, JsonValue};

const DOC: &str = r#"{"name":"Joe","age":42,"scores":[31.4,29.9,35.7],"winner":false}"#;

#[test]
fn compact_encoding_round_trips_sample_unchanged() {
    let doc = decode(DOC).unwrap();
    assert_eq!(encode(&doc).unwrap(), DOC);
}

#[test]
fn compact_encoding_after_mutation() {
    let mut doc = decode(DOC).unwrap();
    doc.set("winner", true).unwrap();
    assert_eq!(
        encode(&doc).unwrap(),
        r#"{"name":"Joe","age":42,"scores":[31.4,29.9,35.7],"winner":true}"#
    );
}

#[test]
fn pretty_encoding_with_two_space_indent() {
    let mut doc = decode(DOC).unwrap();
    doc.set("winner", true).unwrap();
    let expected = r#"{
  "name": "Joe",
  "age": 42,
  "scores": [
    31.4,
    29.9,
    35.7
  ],
  "winner": true
}"#;
    assert_eq!(encode_pretty(&doc, 2).unwrap(), expected);
}

#[test]
fn pretty_nested_object_alignment() {
    let doc = decode(r#"{"outer":{"inner":[1]}}"#).unwrap();
    let expected = "{\n  \"outer\": {\n    \"inner\": [\n      1\n    ]\n  }\n}";
    assert_eq!(encode_pretty(&doc, 2).unwrap(), expected);
}

#[test]
fn pretty_indent_width_is_respected() {
    let doc = decode(r#"{"a":[1]}"#).unwrap();
    assert_eq!(
        encode_pretty(&doc, 4).unwrap(),
        "{\n    \"a\": [\n        1\n    ]\n}"
    );
}

#[test]
fn empty_containers_stay_on_one_line() {
    let doc = decode(r#"{"a":{},"b":[]}"#).unwrap();
    assert_eq!(encode(&doc).unwrap(), r#"{"a":{},"b":[]}"#);
    assert_eq!(
        encode_pretty(&doc, 2).unwrap(),
        "{\n  \"a\": {},\n  \"b\": []\n}"
    );
    assert_eq!(encode(&JsonValue::Object(vec![])).unwrap(), "{}");
    assert_eq!(encode_pretty(&JsonValue::Object(vec![]), 2).unwrap(), "{}");
    assert_eq!(encode(&JsonValue::Array(vec![])).unwrap(), "[]");
}

#[test]
fn scalars_render_as_literals() {
    assert_eq!(encode(&JsonValue::Null).unwrap(), "null");
    assert_eq!(encode(&JsonValue::Bool(true)).unwrap(), "true");
    assert_eq!(encode(&JsonValue::Bool(false)).unwrap(), "false");
}

#[test]
fn number_formatting() {
    assert_eq!(encode(&JsonValue::Number(42.0)).unwrap(), "42");
    assert_eq!(encode(&JsonValue::Number(0.0)).unwrap(), "0");
    assert_eq!(encode(&JsonValue::Number(-3.0)).unwrap(), "-3");
    assert_eq!(encode(&JsonValue::Number(31.4)).unwrap(), "31.4");
    assert_eq!(encode(&JsonValue::Number(-0.5)).unwrap(), "-0.5");
    assert_eq!(encode(&JsonValue::Number(0.1)).unwrap(), "0.1");
}

#[test]
fn string_escaping() {
    let plain = JsonValue::Str("plain ascii".to_string());
    assert_eq!(encode(&plain).unwrap(), r#""plain ascii""#);

    let tricky = JsonValue::Str("a\"b\\c\nd".to_string());
    assert_eq!(encode(&tricky).unwrap(), r#""a\"b\\c\nd""#);

    // control characters take the \uXXXX form
    let ctl = JsonValue::Str("\u{1}".to_string());
    assert_eq!(encode(&ctl).unwrap(), "\"\\u0001\"");

    // non-ASCII is emitted as UTF-8, not escaped
    let unicode = JsonValue::Str("héllo".to_string());
    assert_eq!(encode(&unicode).unwrap(), "\"héllo\"");
}

#[test]
fn non_finite_numbers_fail_to_encode() {
    for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            encode(&JsonValue::Number(n)),
            Err(JsonError::UnsupportedNumber(_))
        ));
    }
}
