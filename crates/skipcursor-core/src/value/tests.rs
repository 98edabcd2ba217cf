use crate::value::{
    NULL_LITERAL, Value, ValueKind, canonical_cmp, format_literal, infer_kind, parse_literal,
};
use proptest::prelude::*;
use skipcursor_primitives::ScalarKind;
use std::cmp::Ordering;
use time::OffsetDateTime;
use uuid::Uuid;

fn round_trip(value: &Value) -> Value {
    let literal = format_literal(value).expect("value should format");
    let kind = infer_kind(&literal).expect("formatted literal should infer a kind");
    assert_eq!(kind, value.kind(), "literal '{literal}' inferred the wrong kind");

    parse_literal(&literal, kind).expect("formatted literal should parse")
}

fn datetime(unix_nanos: i128) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp_nanos(unix_nanos).expect("timestamp should be in range")
}

//
// Literal rendering
//

#[test]
fn format_literal_renders_each_kind() {
    let cases = [
        (Value::Null, "null"),
        (Value::Bool(true), "true"),
        (Value::Int(-17), "-17"),
        (Value::Float(1.5), "1.5D"),
        (Value::Float(1.0), "1.0D"),
        (Value::Float(f64::NEG_INFINITY), "-INFD"),
        (Value::Text("Bob".into()), "Bob"),
        (Value::Text("Bob Smith".into()), "'Bob Smith'"),
        (Value::Text("O'Neil".into()), "'O''Neil'"),
        (Value::Text(String::new()), "''"),
        (Value::Text("17".into()), "'17'"),
        (Value::Text("null".into()), "'null'"),
        (Value::Text("True".into()), "'True'"),
        (
            Value::Guid(Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef)),
            "guid'01234567-89ab-cdef-0123-456789abcdef'",
        ),
        (
            Value::DateTime(datetime(1_700_000_000_000_000_000)),
            "datetime'2023-11-14T22:13:20Z'",
        ),
    ];

    for (value, expected) in cases {
        assert_eq!(
            format_literal(&value).expect("value should format"),
            expected,
            "unexpected rendering for {value:?}"
        );
    }
}

#[test]
fn text_that_looks_like_another_kind_is_quoted_and_round_trips() {
    for text in ["17", "1.5D", "null", "true", "NaND", "INFD", "-3", "a,b", "guid'x'"] {
        let value = Value::Text(text.to_string());
        assert_eq!(round_trip(&value), value, "text '{text}' did not round-trip");
    }
}

#[test]
fn non_finite_floats_round_trip() {
    assert_eq!(round_trip(&Value::Float(f64::INFINITY)), Value::Float(f64::INFINITY));
    assert_eq!(
        round_trip(&Value::Float(f64::NEG_INFINITY)),
        Value::Float(f64::NEG_INFINITY)
    );

    let Value::Float(nan) = round_trip(&Value::Float(f64::NAN)) else {
        panic!("NaN should decode as a float");
    };
    assert!(nan.is_nan());
}

#[test]
fn datetime_literals_normalize_to_utc() {
    let literal = "datetime'2024-03-01T10:00:00+02:00'";
    let kind = infer_kind(literal).expect("tagged literal should infer");
    let value = parse_literal(literal, kind).expect("offset datetime should parse");

    assert_eq!(
        format_literal(&value).expect("datetime should format"),
        "datetime'2024-03-01T08:00:00Z'"
    );
}

//
// Kind inference
//

#[test]
fn infer_kind_classifies_fragment_shapes() {
    let cases = [
        ("null", Some(ValueKind::Null)),
        ("NULL", Some(ValueKind::Null)),
        ("false", Some(ScalarKind::Bool.into())),
        ("17", Some(ScalarKind::Int.into())),
        ("17L", Some(ScalarKind::Int.into())),
        ("-17", Some(ScalarKind::Int.into())),
        ("1.5", Some(ScalarKind::Float.into())),
        ("2e10", Some(ScalarKind::Float.into())),
        ("2D", Some(ScalarKind::Float.into())),
        ("Bob", Some(ScalarKind::Text.into())),
        ("'Bob, Jr'", Some(ScalarKind::Text.into())),
        ("guid'x'", Some(ScalarKind::Guid.into())),
        ("DATETIME'x'", Some(ScalarKind::DateTime.into())),
        ("12abc", None),
        ("blob'00'", None),
        ("Bob Smith", None),
        ("", None),
    ];

    for (fragment, expected) in cases {
        assert_eq!(infer_kind(fragment), expected, "fragment '{fragment}'");
    }
}

//
// Parse failures
//

#[test]
fn parse_literal_rejects_malformed_payloads() {
    let cases = [
        ("99999999999999999999", ValueKind::Scalar(ScalarKind::Int)),
        ("1.2.3D", ValueKind::Scalar(ScalarKind::Float)),
        ("infinityD", ValueKind::Scalar(ScalarKind::Float)),
        ("datetime'2024-13-01T00:00:00Z'", ValueKind::Scalar(ScalarKind::DateTime)),
        ("guid'not-a-guid'", ValueKind::Scalar(ScalarKind::Guid)),
        ("'unbalanced''", ValueKind::Scalar(ScalarKind::Text)),
        ("maybe", ValueKind::Scalar(ScalarKind::Bool)),
        ("nil", ValueKind::Null),
    ];

    for (literal, kind) in cases {
        let err = parse_literal(literal, kind).expect_err("malformed literal should be rejected");
        assert_eq!(err.kind, kind);
        assert_eq!(err.literal, literal);
    }
}

#[test]
fn null_literal_is_reserved() {
    assert_eq!(parse_literal(NULL_LITERAL, ValueKind::Null), Ok(Value::Null));
    assert_eq!(
        format_literal(&Value::Null).expect("null should format"),
        NULL_LITERAL
    );
}

//
// Compatibility + comparison
//

#[test]
fn compatibility_is_identity_or_null() {
    let int = ValueKind::Scalar(ScalarKind::Int);
    let text = ValueKind::Scalar(ScalarKind::Text);
    let float = ValueKind::Scalar(ScalarKind::Float);

    assert!(ValueKind::is_compatible(int, int));
    assert!(ValueKind::is_compatible(int, ValueKind::Null));
    assert!(ValueKind::is_compatible(ValueKind::Null, text));
    assert!(!ValueKind::is_compatible(int, text));
    assert!(!ValueKind::is_compatible(float, int));
}

#[test]
fn canonical_cmp_sorts_null_first() {
    assert_eq!(canonical_cmp(&Value::Null, &Value::Int(i64::MIN)), Ordering::Less);
    assert_eq!(canonical_cmp(&Value::Text(String::new()), &Value::Null), Ordering::Greater);
    assert_eq!(canonical_cmp(&Value::Null, &Value::Null), Ordering::Equal);
    assert_eq!(
        canonical_cmp(&Value::Float(-0.5), &Value::Float(0.5)),
        Ordering::Less
    );
}

//
// Properties
//

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>()
            .prop_filter("NaN never compares equal", |f| !f.is_nan())
            .prop_map(Value::Float),
        any::<u128>().prop_map(|bits| Value::Guid(Uuid::from_u128(bits))),
        (-62_135_596_800_i64..253_402_300_799, 0_u32..1_000_000_000).prop_map(|(secs, nanos)| {
            Value::DateTime(datetime(i128::from(secs) * 1_000_000_000 + i128::from(nanos)))
        }),
        any::<String>().prop_map(Value::Text),
    ]
}

proptest! {
    #[test]
    fn every_kind_round_trips_through_its_literal(value in arb_value()) {
        prop_assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn formatted_literals_never_contain_a_top_level_delimiter(text in any::<String>()) {
        let literal = format_literal(&Value::Text(text)).expect("text should format");
        prop_assert!(!literal.contains(',') || literal.starts_with('\''));
    }
}
