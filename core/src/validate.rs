//! Runtime shape checks for untrusted gallery payloads.
//!
//! # Design
//! The endpoint's body is decoded into an untyped `serde_json::Value` first and
//! only converted to `Pet` once the whole value has been checked. Acceptance
//! is all-or-nothing: a collection with one bad element is rejected as a
//! whole, never filtered down to its valid members.

use serde_json::Value;

use crate::error::ApiError;
use crate::types::Pet;

/// Fields every record must carry, each holding a JSON string.
pub const RECORD_FIELDS: [&str; 4] = ["title", "description", "url", "created"];

/// Returns `true` if `value` is an object whose four record fields are all
/// present and strings. Extra fields are allowed.
pub fn is_record(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    RECORD_FIELDS
        .iter()
        .all(|field| obj.get(*field).is_some_and(Value::is_string))
}

/// Returns `true` if `value` is an array and every element is a record.
/// An empty array is a valid collection.
pub fn is_record_collection(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(is_record))
}

/// Validate `value` and convert it into typed records.
pub fn parse_records(value: Value) -> Result<Vec<Pet>, ApiError> {
    if !is_record_collection(&value) {
        return Err(ApiError::InvalidData("collection of records expected".to_string()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid() -> Value {
        json!({
            "title": "Rex",
            "description": "A dog",
            "url": "http://x/1.png",
            "created": "2021"
        })
    }

    #[test]
    fn accepts_complete_record() {
        assert!(is_record(&valid()));
    }

    #[test]
    fn rejects_each_missing_field() {
        for field in RECORD_FIELDS {
            let mut value = valid();
            value.as_object_mut().unwrap().remove(field);
            assert!(!is_record(&value), "missing {field} should be rejected");
        }
    }

    #[test]
    fn rejects_each_mistyped_field() {
        for field in RECORD_FIELDS {
            let mut value = valid();
            value[field] = json!(1);
            assert!(!is_record(&value), "numeric {field} should be rejected");
            value[field] = Value::Null;
            assert!(!is_record(&value), "null {field} should be rejected");
        }
    }

    #[test]
    fn rejects_non_objects() {
        assert!(!is_record(&Value::Null));
        assert!(!is_record(&json!("Rex")));
        assert!(!is_record(&json!(42)));
        assert!(!is_record(&json!(true)));
        assert!(!is_record(&json!([valid()])));
    }

    #[test]
    fn empty_collection_is_valid() {
        assert!(is_record_collection(&json!([])));
    }

    #[test]
    fn one_bad_element_rejects_collection() {
        assert!(!is_record_collection(&json!([valid(), {"title": 1}])));
    }

    #[test]
    fn object_is_not_a_collection() {
        assert!(!is_record_collection(&json!({"not": "an array"})));
        assert!(!is_record_collection(&valid()));
    }

    #[test]
    fn parse_records_keeps_order() {
        let mut second = valid();
        second["title"] = json!("Mia");
        let pets = parse_records(json!([valid(), second])).unwrap();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0].title, "Rex");
        assert_eq!(pets[1].title, "Mia");
    }

    #[test]
    fn parse_records_reports_invalid_data() {
        let err = parse_records(json!({"not": "an array"})).unwrap_err();
        assert!(matches!(err, ApiError::InvalidData(_)));
        assert_eq!(err.to_string(), "invalid data: collection of records expected");
    }
}
