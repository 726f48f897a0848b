//! Verify the record validator against JSON test vectors stored in `test-vectors/`.
//!
//! Each case names a raw JSON value and the verdict the validator must reach.
//! Collections that pass are also parsed to check the typed conversion agrees
//! with the predicate.

use pet_gallery_core::{is_record, is_record_collection, parse_records, ApiError};

fn vectors() -> serde_json::Value {
    let raw = include_str!("../../test-vectors/records.json");
    serde_json::from_str(raw).unwrap()
}

#[test]
fn record_test_vectors() {
    let vectors = vectors();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = case["is_record"].as_bool().unwrap();
        assert_eq!(is_record(&case["value"]), expected, "{name}");
    }
}

#[test]
fn collection_test_vectors() {
    let vectors = vectors();
    for case in vectors["collections"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = case["is_record_collection"].as_bool().unwrap();
        let value = case["value"].clone();
        assert_eq!(is_record_collection(&value), expected, "{name}: predicate");

        match parse_records(value) {
            Ok(pets) => {
                assert!(expected, "{name}: parsed an invalid collection");
                assert_eq!(pets.len(), case["value"].as_array().unwrap().len(), "{name}: length");
            }
            Err(err) => {
                assert!(!expected, "{name}: rejected a valid collection");
                assert!(matches!(err, ApiError::InvalidData(_)), "{name}: {err}");
            }
        }
    }
}

#[test]
fn every_record_case_agrees_with_singleton_collection() {
    let vectors = vectors();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let wrapped = serde_json::Value::Array(vec![case["value"].clone()]);
        assert_eq!(
            is_record_collection(&wrapped),
            case["is_record"].as_bool().unwrap(),
            "{name}"
        );
    }
}
