#![cfg(feature = "serde")]

//! Integration tests for serde support in lambars-collections.
//!
//! These tests verify that values and mappings round-trip through JSON and
//! that mappings keep their insertion order on the way.

use lambars_collections::{Mapping, Value, record, values};
use rstest::rstest;

// =============================================================================
// Value Tests
// =============================================================================

#[rstest]
fn test_scalar_json_roundtrip() {
    let original = Value::from(values![1, 2.5, "three", true, Value::Null]);
    let json = serde_json::to_string(&original).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[rstest]
fn test_undefined_serializes_as_null() {
    let json = serde_json::to_string(&Value::from(values![Value::Undefined])).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(json, "[null]");
    assert_eq!(restored, Value::from(values![Value::Null]));
}

#[rstest]
fn test_integers_deserialize_as_numbers() {
    let restored: Value = serde_json::from_str("[1, -2, 18446744073709551615]").unwrap();

    assert_eq!(
        restored,
        Value::from(values![1, -2, 18_446_744_073_709_551_615_u64 as f64])
    );
}

#[rstest]
fn test_nested_json_roundtrip() {
    let original = Value::from(record! {
        "name" => "moe",
        "scores" => values![1, values![2, 3]],
        "address" => record! { "city" => "Springfield" },
    });
    let json = serde_json::to_string(&original).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

// =============================================================================
// Mapping Tests
// =============================================================================

#[rstest]
fn test_mapping_serializes_in_insertion_order() {
    let mapping = record! { "zebra" => 1, "apple" => 2, "mango" => 3 };
    let json = serde_json::to_string(&mapping).unwrap();

    assert_eq!(json, r#"{"zebra":1.0,"apple":2.0,"mango":3.0}"#);
}

#[rstest]
fn test_mapping_deserializes_in_document_order() {
    let mapping: Mapping = serde_json::from_str(r#"{"c": 1, "a": 2, "b": 3}"#).unwrap();

    assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["c", "a", "b"]);
}

#[rstest]
fn test_mapping_rejects_non_object() {
    let result: Result<Mapping, _> = serde_json::from_str("[1, 2]");

    assert!(result.is_err());
}
