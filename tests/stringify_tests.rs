use yajson::{
    json, parse, stringify, stringify_pretty, stringify_with_options, Error, StringifyOptions,
    Value,
};

/// parse -> stringify -> parse must reproduce the same document. The
/// emitted text may normalize number spelling and whitespace, so equality
/// is checked structurally, not textually.
fn assert_roundtrip(text: &str) {
    let doc = parse(text).unwrap();
    let emitted = stringify(&doc).unwrap();
    assert_eq!(parse(&emitted).unwrap(), doc, "emitted: {:?}", emitted);
}

#[test]
fn test_stringify_literals() {
    assert_eq!(stringify(&Value::Null).unwrap(), "null");
    assert_eq!(stringify(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(stringify(&Value::Bool(false)).unwrap(), "false");
}

#[test]
fn test_stringify_number_roundtrip_bits() {
    let cases = [
        "0",
        "-0",
        "1",
        "-1",
        "1.5",
        "-1.5",
        "3.25",
        "1e+20",
        "1.234e+20",
        "1.234e-20",
        "1.0000000000000002",      // the smallest number > 1
        "4.9406564584124654e-324", // minimum denormal
        "-4.9406564584124654e-324",
        "2.2250738585072009e-308", // max subnormal double
        "-2.2250738585072009e-308",
        "2.2250738585072014e-308", // min normal positive double
        "-2.2250738585072014e-308",
        "1.7976931348623157e+308", // max double
        "-1.7976931348623157e+308",
    ];
    for text in cases {
        let original = parse(text).unwrap().get_number();
        let emitted = stringify(&Value::Number(original)).unwrap();
        let reparsed = parse(&emitted).unwrap().get_number();
        assert_eq!(
            original.to_bits(),
            reparsed.to_bits(),
            "number {:?} emitted as {:?}",
            text,
            emitted
        );
    }
}

#[test]
fn test_stringify_string_exact() {
    assert_eq!(stringify(&parse("\"\"").unwrap()).unwrap(), "\"\"");
    assert_eq!(stringify(&parse("\"Hello\"").unwrap()).unwrap(), "\"Hello\"");
    assert_eq!(
        stringify(&parse("\"Hello\\nWorld\"").unwrap()).unwrap(),
        "\"Hello\\nWorld\""
    );
    // '/' may arrive escaped but is always emitted raw
    assert_eq!(
        stringify(&parse("\"\\\" \\\\ \\/ \\b \\f \\n \\r \\t\"").unwrap()).unwrap(),
        "\"\\\" \\\\ / \\b \\f \\n \\r \\t\""
    );
    assert_eq!(
        stringify(&parse("\"Hello\\u0000World\"").unwrap()).unwrap(),
        "\"Hello\\u0000World\""
    );
}

#[test]
fn test_stringify_unicode_roundtrip() {
    assert_roundtrip("\"\\u00A2\""); // cents sign
    assert_roundtrip("\"\\u20AC\""); // euro sign
    assert_roundtrip("\"\\uD834\\uDD1E\""); // G clef, beyond the BMP
    assert_roundtrip("\"caf\u{e9}\""); // raw UTF-8 input
}

#[test]
fn test_stringify_array() {
    assert_eq!(stringify(&parse("[]").unwrap()).unwrap(), "[]");
    assert_eq!(
        stringify(&parse("[null,false,true,\"abc\"]").unwrap()).unwrap(),
        "[null,false,true,\"abc\"]"
    );
    assert_roundtrip("[null,false,true,123,\"abc\",[1,2,3]]");
}

#[test]
fn test_stringify_object() {
    assert_eq!(stringify(&parse("{}").unwrap()).unwrap(), "{}");
    assert_roundtrip(
        "{\"n\":null,\"f\":false,\"t\":true,\"i\":123,\"s\":\"abc\",\"a\":[1,2,3],\"o\":{\"1\":1,\"2\":2,\"3\":3}}",
    );
}

#[test]
fn test_stringify_preserves_member_order_and_duplicates() {
    let doc = json!({"b": 1, "a": 2, "b": 3});
    assert_eq!(
        stringify(&doc).unwrap(),
        "{\"b\":1.0,\"a\":2.0,\"b\":3.0}"
    );
}

#[test]
fn test_stringify_rejects_non_finite() {
    assert_eq!(stringify(&Value::Number(f64::NAN)), Err(Error::NonFiniteNumber));
    assert_eq!(
        stringify(&Value::Number(f64::INFINITY)),
        Err(Error::NonFiniteNumber)
    );
    assert_eq!(
        stringify(&Value::Number(f64::NEG_INFINITY)),
        Err(Error::NonFiniteNumber)
    );
    let doc = json!({"nested": [1.0]});
    assert!(stringify(&doc).is_ok());
    let bad = Value::Array(vec![Value::Null, Value::Number(f64::NAN)]);
    assert_eq!(stringify(&bad), Err(Error::NonFiniteNumber));
}

#[test]
fn test_pretty_reparses_equal() {
    let doc = parse("{\"a\":[1,{\"b\":null}],\"c\":\"text\"}").unwrap();
    let pretty = stringify_pretty(&doc).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(parse(&pretty).unwrap(), doc);
}

#[test]
fn test_pretty_indent_width() {
    let options = StringifyOptions::pretty().with_indent_width(4);
    let doc = json!({"a": true});
    assert_eq!(
        stringify_with_options(&doc, &options).unwrap(),
        "{\n    \"a\": true\n}"
    );
}

#[test]
fn test_escape_non_ascii_is_ascii_and_reparses_equal() {
    let doc = parse("{\"greeting\":\"\u{4f60}\u{597d} \u{1f600}\"}").unwrap();
    let options = StringifyOptions::new().with_escape_non_ascii(true);
    let text = stringify_with_options(&doc, &options).unwrap();
    assert!(text.is_ascii());
    assert_eq!(parse(&text).unwrap(), doc);
}

#[test]
fn test_emitted_text_is_accepted_by_serde_json() {
    let corpus = [
        "null",
        "[null,false,true,123,\"abc\",[1,2,3]]",
        "{\"n\":null,\"a\":[1.5,-2e10],\"s\":\"\\u0001\\n\u{20ac}\"}",
        "\"\\uD834\\uDD1E\"",
    ];
    for text in corpus {
        let doc = parse(text).unwrap();
        let emitted = stringify(&doc).unwrap();
        let check: Result<serde_json::Value, _> = serde_json::from_str(&emitted);
        assert!(check.is_ok(), "serde_json rejected {:?}", emitted);
    }
}
