//! Error types for the Story MCP Server.
//!
//! All failure modes are expressed as `StoryError` variants via `thiserror`.
//! Every error is caught at the tool boundary and rendered as a single-line
//! error envelope, so messages here are written for an AI assistant reading
//! the tool output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoryError {
    /// A required argument is missing or blank. Detected before any storage call.
    #[error("{message}")]
    Validation { message: String },

    /// Create was invoked with a ticket number that already exists.
    #[error("Story with ticket number {ticket_number} already exists")]
    Conflict { ticket_number: String },

    /// Update or delete was invoked with a ticket number that does not exist.
    #[error("Story with ticket number {ticket_number} not found")]
    NotFound { ticket_number: String },

    /// Update was invoked without any mutable field.
    #[error("No fields provided to update")]
    NoFields,

    /// The storage engine rejected a statement or the connection failed.
    /// The message is propagated verbatim, without retry or masking.
    #[error("Database error: {message}")]
    Database { message: String },

    /// Invalid configuration (bad table identifier, malformed URL).
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl StoryError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error for a duplicate ticket number.
    pub fn conflict(ticket_number: impl Into<String>) -> Self {
        Self::Conflict {
            ticket_number: ticket_number.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(ticket_number: impl Into<String>) -> Self {
        Self::NotFound {
            ticket_number: ticket_number.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoryError {
    fn from(err: sqlx::Error) -> Self {
        let message = match err {
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => format!("{} (SQLSTATE: {})", db_err.message(), code),
                None => db_err.message().to_string(),
            },
            other => other.to_string(),
        };
        StoryError::Database { message }
    }
}

/// Result type alias for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_display() {
        let err = StoryError::conflict("TICKET-003");
        assert_eq!(
            err.to_string(),
            "Story with ticket number TICKET-003 already exists"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = StoryError::not_found("T-9");
        assert_eq!(err.to_string(), "Story with ticket number T-9 not found");
    }

    #[test]
    fn test_validation_message_passed_through() {
        let err = StoryError::validation("ticket_number is required and must be a string");
        assert_eq!(
            err.to_string(),
            "ticket_number is required and must be a string"
        );
    }

    #[test]
    fn test_no_fields_display() {
        assert_eq!(StoryError::NoFields.to_string(), "No fields provided to update");
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: StoryError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoryError::Database { .. }));
        assert!(err.to_string().starts_with("Database error:"));
    }
}
