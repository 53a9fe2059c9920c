//! Story tool handlers.
//!
//! Each handler method validates its input, delegates to the store, and
//! renders the response text. The MCP service layer wraps these strings into
//! protocol results.

use crate::db::StoryStore;
use crate::error::{StoryError, StoryResult};
use crate::guidance;
use crate::models::{StoryDraft, StoryPatch};
use crate::tools::format;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

/// Input for the get_story_by_ticket tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetStoryInput {
    /// The ticket number of the story to retrieve (e.g., "101")
    pub ticket_number: String,
}

/// Input for the get_related_stories tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RelatedStoriesInput {
    /// Ticket number of the current story, excluded from the results
    pub exclude_ticket: String,
}

/// Input for the search_stories tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchStoriesInput {
    /// Keyword to search for in story titles and descriptions
    pub keyword: String,
}

/// Input for the create_story tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateStoryInput {
    /// Unique ticket number for the new story (e.g., "101")
    pub ticket_number: String,
    /// Title of the user story
    pub title: String,
    /// Detailed description of the user story (optional)
    #[serde(default)]
    pub description: Option<String>,
    /// Status of the story, e.g. "To Do", "In Progress", "Done" (optional)
    #[serde(default)]
    pub status: Option<String>,
    /// Priority of the story, e.g. "High", "Medium", "Low" (optional)
    #[serde(default)]
    pub priority: Option<String>,
}

/// Input for the update_story tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateStoryInput {
    /// Ticket number of the story to update
    pub ticket_number: String,
    /// New title (optional; blank values are ignored)
    #[serde(default)]
    pub title: Option<String>,
    /// New description (optional; an empty string clears the description)
    #[serde(default)]
    pub description: Option<String>,
    /// New status (optional; blank values are ignored)
    #[serde(default)]
    pub status: Option<String>,
    /// New priority (optional; blank values are ignored)
    #[serde(default)]
    pub priority: Option<String>,
}

/// Input for the delete_story tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteStoryInput {
    /// Ticket number of the story to delete
    pub ticket_number: String,
}

/// Handler for all story tools, sharing one store.
#[derive(Debug, Clone)]
pub struct StoryToolHandler {
    store: Arc<StoryStore>,
}

impl StoryToolHandler {
    pub fn new(store: Arc<StoryStore>) -> Self {
        Self { store }
    }

    /// Fetch every story, with the generation prelude.
    pub async fn get_all_stories(&self) -> StoryResult<String> {
        let rows = self.store.list_all().await?;
        if rows.is_empty() {
            return Ok(format::no_stories_message());
        }
        Ok(format::with_prelude(
            guidance::ALL_STORIES_PRELUDE,
            &format::rows_to_json(&rows),
        ))
    }

    /// Fetch the story with a given ticket number.
    pub async fn get_story_by_ticket(&self, input: GetStoryInput) -> StoryResult<String> {
        let ticket_number = required(&input.ticket_number, "ticket_number")?;
        let rows = self.store.fetch_by_key(ticket_number).await?;
        if rows.is_empty() {
            return Ok(format::no_story_for_ticket_message(ticket_number));
        }
        Ok(format::with_prelude(
            guidance::SINGLE_STORY_PRELUDE,
            &format::rows_to_json(&rows),
        ))
    }

    /// Fetch every story except the excluded one, for precondition context.
    pub async fn get_related_stories(&self, input: RelatedStoriesInput) -> StoryResult<String> {
        let exclude_ticket = required(&input.exclude_ticket, "exclude_ticket")?;
        let rows = self.store.fetch_excluding(exclude_ticket).await?;
        if rows.is_empty() {
            return Ok(format::no_related_stories_message());
        }
        Ok(format::with_prelude(
            guidance::RELATED_STORIES_PRELUDE,
            &format::rows_to_json(&rows),
        ))
    }

    /// Case-insensitive keyword search over titles and descriptions.
    pub async fn search_stories(&self, input: SearchStoriesInput) -> StoryResult<String> {
        let keyword = required(&input.keyword, "keyword")?;
        let rows = self.store.search(keyword).await?;
        if rows.is_empty() {
            return Ok(format::no_search_matches_message(keyword));
        }
        Ok(format::rows_to_json(&rows))
    }

    /// Create a new story and return the stored row.
    pub async fn create_story(&self, input: CreateStoryInput) -> StoryResult<String> {
        let ticket_number = required(&input.ticket_number, "ticket_number")?;
        let title = required(&input.title, "title")?;
        let draft = StoryDraft::new(
            ticket_number,
            title,
            input.description.clone(),
            input.status.clone(),
            input.priority.clone(),
        );
        let row = self.store.create(&draft).await?;
        Ok(format::created_message(&row))
    }

    /// Apply a partial update and return the updated row.
    pub async fn update_story(&self, input: UpdateStoryInput) -> StoryResult<String> {
        let ticket_number = required(&input.ticket_number, "ticket_number")?;
        let patch = StoryPatch::new(
            input.title.clone(),
            input.description.clone(),
            input.status.clone(),
            input.priority.clone(),
        );
        let row = self.store.update(ticket_number, &patch).await?;
        Ok(format::updated_message(&row))
    }

    /// Delete a story and return its final snapshot.
    pub async fn delete_story(&self, input: DeleteStoryInput) -> StoryResult<String> {
        let ticket_number = required(&input.ticket_number, "ticket_number")?;
        let row = self.store.delete(ticket_number).await?;
        Ok(format::deleted_message(ticket_number, &row))
    }
}

/// Reject missing or whitespace-only required string arguments.
fn required<'a>(value: &'a str, field: &str) -> StoryResult<&'a str> {
    if value.trim().is_empty() {
        return Err(StoryError::validation(format!(
            "{} is required and must be a string",
            field
        )));
    }
    Ok(value)
}
