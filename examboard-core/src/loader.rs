//! Loading and validating record datasets.
//!
//! Validation is two-stage: the document's shape (an array of objects) is
//! checked hard, while field content inside an object passes through
//! untouched. Loaded data is trusted on shape, not on content; the strict
//! policy lives in `Store::append` for interactively entered records.

use serde_json::Value;

use crate::error::{ExamBoardError, ExamBoardResult};
use crate::record::ExamRecord;

/// Fetches raw dataset text by source identifier (URL or path).
///
/// The CLI supplies an HTTP/file implementation; tests use stubs.
#[allow(async_fn_in_trait)]
pub trait RecordFetcher {
    async fn fetch(&self, source: &str) -> ExamBoardResult<String>;
}

/// Parse a raw JSON document into records.
///
/// Fails with `Format` when the text is not JSON, and with `Schema` when
/// the root is not an array or an element is not an object.
pub fn parse_records(raw: &str) -> ExamBoardResult<Vec<ExamRecord>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ExamBoardError::Format(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ExamBoardError::Schema(format!(
                "top-level value is {}, not an array",
                json_type(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(ExamBoardError::Schema(format!(
                    "element {} is {}, not an object",
                    index,
                    json_type(&item)
                )));
            }
            serde_json::from_value(item)
                .map_err(|e| ExamBoardError::Format(format!("element {}: {}", index, e)))
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_dataset() {
        let raw = r#"[
            {"subject": "Math", "date": "2099-01-01", "startTime": "09:00", "endTime": "11:00", "paperInfo": "4 pages"},
            {"subject": "English", "date": "2099-01-02", "startTime": "14:00", "endTime": "16:00", "paperInfo": "3 pages"}
        ]"#;

        let records = parse_records(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject, "Math");
        assert_eq!(records[1].start_time, "14:00");
    }

    #[test]
    fn test_record_fields_are_not_deep_validated() {
        let raw = r#"[{"subject": "Math", "date": 20990101}]"#;

        let records = parse_records(raw).unwrap();
        assert_eq!(records[0].date, "20990101");
        assert_eq!(records[0].start_time, "");
    }

    #[test]
    fn test_invalid_json_is_a_format_error() {
        let err = parse_records("not json at all {").unwrap_err();
        assert!(matches!(err, ExamBoardError::Format(_)));
    }

    #[test]
    fn test_non_array_root_is_a_schema_error() {
        let err = parse_records(r#"{"subject": "Math"}"#).unwrap_err();
        match err {
            ExamBoardError::Schema(msg) => assert!(msg.contains("not an array")),
            other => panic!("expected Schema, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_element_is_a_schema_error() {
        let err = parse_records(r#"["Math"]"#).unwrap_err();
        match err {
            ExamBoardError::Schema(msg) => assert!(msg.contains("element 0")),
            other => panic!("expected Schema, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_records("[]").unwrap().is_empty());
    }
}
