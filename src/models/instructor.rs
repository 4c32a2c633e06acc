use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::{list_field, string_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Only the two recognized literals survive coercion; anything else is absent.
    fn from_value(value: &Value) -> Option<Gender> {
        match value.as_str() {
            Some("male") => Some(Gender::Male),
            Some("female") => Some(Gender::Female),
            _ => None,
        }
    }
}

/// One person teaching at one facility in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub current_center: String,
    pub category: String,
    pub position: String,
    pub image_url: Option<String>,
    pub gender: Option<Gender>,
    pub assigned_classes: Vec<String>,
    pub licenses: Vec<String>,
    pub career: Vec<String>,
}

impl Instructor {
    /// Builds a record from an arbitrary stored document. Total: malformed or
    /// partially-written documents coerce to defaults instead of failing.
    pub fn from_document(id: impl Into<String>, data: &Value) -> Instructor {
        Instructor {
            id: id.into(),
            name: string_field(data, "name"),
            current_center: string_field(data, "currentCenter"),
            category: string_field(data, "category"),
            position: string_field(data, "position"),
            image_url: data
                .get("imageUrl")
                .and_then(Value::as_str)
                .map(str::to_owned),
            gender: data.get("gender").and_then(Gender::from_value),
            assigned_classes: list_field(data, "assignedClasses"),
            licenses: list_field(data, "licenses"),
            career: list_field(data, "career"),
        }
    }

    /// The persisted field bag. Absent `imageUrl`/`gender` are written as
    /// explicit nulls so a prior value is cleared rather than left stale.
    pub fn to_document(&self) -> Value {
        json!({
            "name": self.name,
            "currentCenter": self.current_center,
            "category": self.category,
            "position": self.position,
            "imageUrl": self.image_url,
            "gender": self.gender,
            "assignedClasses": self.assigned_classes,
            "licenses": self.licenses,
            "career": self.career,
        })
    }

    /// Write gate: required display fields must be non-empty before any save.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("name", &self.name),
            ("currentCenter", &self.current_center),
            ("category", &self.category),
            ("position", &self.position),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        Ok(())
    }
}
