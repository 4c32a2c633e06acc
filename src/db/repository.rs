use chrono::Utc;
use serde_json::Value;
use sqlx::{Row, SqlitePool};
use tracing::warn;

use crate::error::AppError;
use crate::models::{Instructor, TimetableUrlEntry, timetable_doc_id};

/// Id for a new instructor record. Unique within a process lifetime; the
/// `inst<millis>` scheme is part of the persisted-id contract with the store.
pub fn new_instructor_id() -> String {
    format!("inst{}", Utc::now().timestamp_millis())
}

/// Every instructor document, ordered by the stored `name` field (byte order,
/// not locale-aware). A failed read degrades to an empty list: the caller
/// cannot tell an unreachable store from an empty collection.
pub async fn fetch_instructors(db: &SqlitePool) -> Vec<Instructor> {
    let rows = match sqlx::query(
        "SELECT id, data FROM instructors ORDER BY json_extract(data, '$.name') ASC",
    )
    .fetch_all(db)
    .await
    {
        Ok(rows) => rows,
        Err(err) => {
            warn!("instructor fetch failed, returning empty list: {}", err);
            return Vec::new();
        }
    };

    rows.iter()
        .map(|row| {
            let id: String = row.get("id");
            let raw: String = row.get("data");
            let data = serde_json::from_str::<Value>(&raw).unwrap_or(Value::Null);
            Instructor::from_document(id, &data)
        })
        .collect()
}

/// Full-document upsert at `instructor.id`. Refuses invalid records before
/// the store is contacted.
pub async fn save_instructor(db: &SqlitePool, instructor: &Instructor) -> Result<(), AppError> {
    instructor.validate()?;

    sqlx::query(
        "INSERT INTO instructors (id, data) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET data = excluded.data",
    )
    .bind(&instructor.id)
    .bind(instructor.to_document().to_string())
    .execute(db)
    .await
    .map_err(AppError::StoreWrite)?;

    Ok(())
}

/// Delete by id. Idempotent: a missing id is not an error.
pub async fn delete_instructor(db: &SqlitePool, id: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM instructors WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await
        .map_err(AppError::StoreWrite)?;

    Ok(())
}

/// Point lookup by (center, category). Absent when there is no entry, the
/// stored `url` field is not a string, or the read fails.
pub async fn get_timetable_url(
    db: &SqlitePool,
    center_name: &str,
    category_name: &str,
) -> Option<String> {
    let row = match sqlx::query("SELECT data FROM timetable_urls WHERE id = ?1")
        .bind(timetable_doc_id(center_name, category_name))
        .fetch_optional(db)
        .await
    {
        Ok(row) => row?,
        Err(err) => {
            warn!("timetable url fetch failed: {}", err);
            return None;
        }
    };

    let raw: String = row.get("data");
    let data = serde_json::from_str::<Value>(&raw).ok()?;
    data.get("url").and_then(Value::as_str).map(str::to_owned)
}

/// Upsert at the composite key; creating an entry for an existing pair
/// overwrites it. The url is trimmed before storage.
pub async fn set_timetable_url(
    db: &SqlitePool,
    center_name: &str,
    category_name: &str,
    url: &str,
) -> Result<(), AppError> {
    let entry = TimetableUrlEntry {
        center_name: center_name.to_owned(),
        category_name: category_name.to_owned(),
        url: url.trim().to_owned(),
    };

    sqlx::query(
        "INSERT INTO timetable_urls (id, data) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET data = excluded.data",
    )
    .bind(timetable_doc_id(center_name, category_name))
    .bind(entry.to_document().to_string())
    .execute(db)
    .await
    .map_err(AppError::StoreWrite)?;

    Ok(())
}

/// Full scan, unordered. Documents missing fields are coerced, not rejected;
/// a failed read degrades to an empty list.
pub async fn list_timetable_urls(db: &SqlitePool) -> Vec<TimetableUrlEntry> {
    let rows = match sqlx::query("SELECT data FROM timetable_urls")
        .fetch_all(db)
        .await
    {
        Ok(rows) => rows,
        Err(err) => {
            warn!("timetable url listing failed, returning empty list: {}", err);
            return Vec::new();
        }
    };

    rows.iter()
        .map(|row| {
            let raw: String = row.get("data");
            let data = serde_json::from_str::<Value>(&raw).unwrap_or(Value::Null);
            TimetableUrlEntry::from_document(&data)
        })
        .collect()
}

/// Delete by composite key. Idempotent.
pub async fn delete_timetable_url(
    db: &SqlitePool,
    center_name: &str,
    category_name: &str,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM timetable_urls WHERE id = ?1")
        .bind(timetable_doc_id(center_name, category_name))
        .execute(db)
        .await
        .map_err(AppError::StoreWrite)?;

    Ok(())
}
