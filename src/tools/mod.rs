//! MCP tool implementations.
//!
//! This module contains the story tool handlers:
//! - `get_all_stories`: Fetch every story for test case generation
//! - `get_story_by_ticket`: Fetch one story by ticket number
//! - `get_related_stories`: Fetch surrounding stories for preconditions
//! - `search_stories`: Keyword search over titles and descriptions
//! - `create_story` / `update_story` / `delete_story`: Table management
//!
//! `format` renders rows into the response text shared by all tools.

pub mod format;
pub mod stories;

pub use stories::{
    CreateStoryInput, DeleteStoryInput, GetStoryInput, RelatedStoriesInput, SearchStoriesInput,
    StoryToolHandler, UpdateStoryInput,
};
