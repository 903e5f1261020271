//! Property-based tests for the parse/stringify round-trip guarantee.
//!
//! Generated documents cover every value kind, nested containers,
//! duplicate object keys, and the full finite f64 range.

use proptest::prelude::*;
use yajson::{parse, stringify, stringify_pretty, stringify_with_options, StringifyOptions, Value};

fn arb_finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_map(|f| if f.is_finite() { f } else { 0.0 })
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_finite_f64().prop_map(Value::Number),
        ".*".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((".*", inner), 0..8)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_roundtrip(value in arb_value()) {
        let text = stringify(&value).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn prop_roundtrip_pretty(value in arb_value()) {
        let text = stringify_pretty(&value).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn prop_roundtrip_ascii_escaped(value in arb_value()) {
        let options = StringifyOptions::new().with_escape_non_ascii(true);
        let text = stringify_with_options(&value, &options).unwrap();
        prop_assert!(text.is_ascii());
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn prop_number_bits_survive_roundtrip(n in arb_finite_f64()) {
        let text = stringify(&Value::Number(n)).unwrap();
        let reparsed = parse(&text).unwrap().get_number();
        prop_assert_eq!(n.to_bits(), reparsed.to_bits());
    }

    #[test]
    fn prop_string_roundtrip(s in ".*") {
        let text = stringify(&Value::String(s.clone())).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), Value::String(s));
    }

    #[test]
    fn prop_stringify_is_side_effect_free(value in arb_value()) {
        let before = value.clone();
        let _ = stringify(&value).unwrap();
        prop_assert_eq!(value, before);
    }
}
