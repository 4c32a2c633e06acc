pub mod instructor;
pub mod timetable;

pub use instructor::{Gender, Instructor};
pub use timetable::{TimetableUrlEntry, timetable_doc_id};

use serde_json::Value;

/// Stored field as a string, or empty when missing or of the wrong type.
pub(crate) fn string_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Stored field as a string sequence, or empty when it is not a sequence.
pub(crate) fn list_field(data: &Value, key: &str) -> Vec<String> {
    match data.get(key).and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        None => Vec::new(),
    }
}
