//! Data models for the Story MCP Server.

pub mod story;

pub use story::{StoryDraft, StoryPatch, StoryRow};
