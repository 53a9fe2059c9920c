//! Rendering of story rows into tool response text.
//!
//! Results are pretty-printed JSON, optionally preceded by a guidance
//! prelude. Empty result sets get a short human-readable message instead of
//! an empty JSON array.

use crate::models::StoryRow;
use serde_json::Value as JsonValue;

/// Pretty-print a set of rows as a JSON array.
pub fn rows_to_json(rows: &[StoryRow]) -> String {
    let values: Vec<JsonValue> = rows.iter().cloned().map(JsonValue::Object).collect();
    // A Vec<Map<String, Value>> cannot fail to serialize.
    serde_json::to_string_pretty(&values).unwrap_or_else(|_| "[]".to_string())
}

/// Pretty-print a single row as a JSON object.
pub fn row_to_json(row: &StoryRow) -> String {
    serde_json::to_string_pretty(&JsonValue::Object(row.clone()))
        .unwrap_or_else(|_| "{}".to_string())
}

/// A prelude followed by a blank line and the JSON payload.
pub fn with_prelude(prelude: &str, json: &str) -> String {
    format!("{}\n\n{}", prelude, json)
}

pub fn no_stories_message() -> String {
    "No stories found in the database.".to_string()
}

pub fn no_story_for_ticket_message(ticket_number: &str) -> String {
    format!("No story found with ticket number: {}", ticket_number)
}

pub fn no_related_stories_message() -> String {
    "No related stories found.".to_string()
}

pub fn no_search_matches_message(keyword: &str) -> String {
    format!("No stories found matching keyword: {}", keyword)
}

pub fn created_message(row: &StoryRow) -> String {
    format!("Story created successfully:\n{}", row_to_json(row))
}

pub fn updated_message(row: &StoryRow) -> String {
    format!("Story updated successfully:\n{}", row_to_json(row))
}

pub fn deleted_message(ticket_number: &str, row: &StoryRow) -> String {
    format!(
        "Story {} deleted successfully:\n{}",
        ticket_number,
        row_to_json(row)
    )
}
