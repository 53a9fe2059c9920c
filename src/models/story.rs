//! Story record types.
//!
//! A story row is represented as an open JSON map rather than a closed
//! struct: the server enumerates the columns it writes, but forwards
//! whatever columns the storage engine returns.
//!
//! # Blank-value policy
//!
//! For `title`, `status` and `priority`, a blank (empty or whitespace-only)
//! value is treated as "not supplied" on both create and update. Only
//! `description` accepts explicit clearing: a supplied description is
//! written verbatim on update, including the empty string.

use serde_json::Value as JsonValue;

/// A result row: column name to JSON value, passed through opaquely.
pub type StoryRow = serde_json::Map<String, JsonValue>;

/// Normalize an optional field value under the blank-value policy.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fields for a new story. `ticket_number` and `title` are required;
/// the rest are inserted only when supplied, so omitted columns take
/// their storage defaults.
#[derive(Debug, Clone)]
pub struct StoryDraft {
    pub ticket_number: String,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl StoryDraft {
    /// Build a draft, applying the blank-value policy to the optional fields.
    pub fn new(
        ticket_number: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
        status: Option<String>,
        priority: Option<String>,
    ) -> Self {
        Self {
            ticket_number: ticket_number.into(),
            title: title.into(),
            description: non_blank(description),
            status: non_blank(status),
            priority: non_blank(priority),
        }
    }

    /// The optional columns that were actually supplied, in column order.
    pub fn optional_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::new();
        if let Some(v) = &self.description {
            fields.push(("description", v.as_str()));
        }
        if let Some(v) = &self.status {
            fields.push(("status", v.as_str()));
        }
        if let Some(v) = &self.priority {
            fields.push(("priority", v.as_str()));
        }
        fields
    }
}

/// A sparse set of fields for a partial update. Only populated fields are
/// folded into the UPDATE statement, keeping placeholders and bound
/// parameters in lockstep.
#[derive(Debug, Clone, Default)]
pub struct StoryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl StoryPatch {
    /// Build a patch, applying the blank-value policy. `description` is kept
    /// verbatim when supplied so callers can clear it explicitly.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        status: Option<String>,
        priority: Option<String>,
    ) -> Self {
        Self {
            title: non_blank(title),
            description,
            status: non_blank(status),
            priority: non_blank(priority),
        }
    }

    /// The columns to update, in column order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::new();
        if let Some(v) = &self.title {
            fields.push(("title", v.as_str()));
        }
        if let Some(v) = &self.description {
            fields.push(("description", v.as_str()));
        }
        if let Some(v) = &self.status {
            fields.push(("status", v.as_str()));
        }
        if let Some(v) = &self.priority {
            fields.push(("priority", v.as_str()));
        }
        fields
    }

    /// True when no field survived normalization.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}
