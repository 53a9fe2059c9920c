//! Story MCP Server Library
//!
//! This library provides MCP (Model Context Protocol) tools for AI assistants
//! to read and manage a user-story table and turn the stories into
//! industry-standard manual test cases.

pub mod config;
pub mod db;
pub mod error;
pub mod guidance;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod transport;

pub use config::Config;
pub use error::StoryError;
pub use mcp::StoryService;
