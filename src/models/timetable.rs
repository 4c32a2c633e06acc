use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::models::string_field;

/// Document key for a (center, category) pair. The store only supports
/// single-field keys, so the pair is joined with an underscore.
pub fn timetable_doc_id(center_name: &str, category_name: &str) -> String {
    format!("{center_name}_{category_name}")
}

/// External timetable link for one (center, category) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableUrlEntry {
    pub center_name: String,
    pub category_name: String,
    pub url: String,
}

impl TimetableUrlEntry {
    pub fn from_document(data: &Value) -> TimetableUrlEntry {
        TimetableUrlEntry {
            center_name: string_field(data, "centerName"),
            category_name: string_field(data, "categoryName"),
            url: string_field(data, "url"),
        }
    }

    pub fn to_document(&self) -> Value {
        json!({
            "centerName": self.center_name,
            "categoryName": self.category_name,
            "url": self.url,
        })
    }
}
