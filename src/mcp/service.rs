//! MCP service implementation using rmcp.
//!
//! This module defines the StoryService struct with all story tools exposed
//! via the MCP protocol using the rmcp framework's macros. Every tool returns
//! a text result; failures are reported as error results carrying a single
//! `Error: ...` line rather than protocol-level errors, so the calling model
//! sees them and can react.

use crate::db::StoryStore;
use crate::error::StoryResult;
use crate::guidance;
use crate::tools::{
    CreateStoryInput, DeleteStoryInput, GetStoryInput, RelatedStoriesInput, SearchStoriesInput,
    StoryToolHandler, UpdateStoryInput,
};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct StoryService {
    /// Shared handler for all story operations
    handler: StoryToolHandler,
    /// Tool router for MCP tool dispatch (auto-generated)
    tool_router: ToolRouter<Self>,
}

impl StoryService {
    pub fn new(store: Arc<StoryStore>) -> Self {
        Self {
            handler: StoryToolHandler::new(store),
            tool_router: Self::tool_router(),
        }
    }

    /// Wrap a handler outcome in a protocol result.
    ///
    /// Success and failure both travel as tool results; only transport-level
    /// problems surface as MCP errors, and the handlers never produce those.
    fn respond(&self, tool: &str, outcome: StoryResult<String>) -> Result<CallToolResult, McpError> {
        match outcome {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                warn!(tool, error = %e, "Tool call failed");
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {}",
                    e
                ))]))
            }
        }
    }
}

#[tool_router]
impl StoryService {
    #[tool(
        description = "Get all user stories from the database and IMMEDIATELY generate industry-standard test cases.\nCRITICAL INSTRUCTIONS:\n1. DETECT application type (web/mobile/both/desktop) from each story\n2. Use Test Case ID format: [TICKET_NUMBER][SEQUENCE] (e.g., 101001, 101002)\n3. Use simple step numbering: 1. 2. 3. (NOT 'Step 1:')\n4. Output in CSV format with columns: Test Case ID, Title, Priority, Test Type, Preconditions, Test Data, Test Steps, Expected Result\n5. Write 6-10 industry-standard steps per test case, starting from browser/app entry\n6. Every test case must be standalone and executable by a first-time user\n7. Maintain the same detail level across ALL test cases\n8. Include concrete test data (emails, passwords, field values)\n9. Do NOT ask for confirmation; generate the test cases immediately"
    )]
    async fn get_all_stories(&self) -> Result<CallToolResult, McpError> {
        self.respond("get_all_stories", self.handler.get_all_stories().await)
    }

    #[tool(
        description = "Get a specific user story by ticket number and IMMEDIATELY generate test case(s) for it.\nCRITICAL: Match the format, structure, and detail level of previously generated test cases.\nUse Test Case ID format [TICKET_NUMBER][SEQUENCE] and simple step numbering (1. 2. 3.).\nDetect the application type from the story before writing the first step."
    )]
    async fn get_story_by_ticket(
        &self,
        Parameters(input): Parameters<GetStoryInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond(
            "get_story_by_ticket",
            self.handler.get_story_by_ticket(input).await,
        )
    }

    #[tool(
        description = "Get related user stories (excluding the current one) to understand dependencies and write clear preconditions.\nUse this before generating test cases that depend on other features.\nPreconditions should be 2-4 concise bullet points describing the starting state, never vague ('User is logged in') and never step-by-step instructions."
    )]
    async fn get_related_stories(
        &self,
        Parameters(input): Parameters<RelatedStoriesInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond(
            "get_related_stories",
            self.handler.get_related_stories(input).await,
        )
    }

    #[tool(
        description = "Search user stories by a keyword in the title or description.\nThe search is case-insensitive and matches substrings.\nReturns the matching stories as JSON."
    )]
    async fn search_stories(
        &self,
        Parameters(input): Parameters<SearchStoriesInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("search_stories", self.handler.search_stories(input).await)
    }

    #[tool(
        description = "Create a new user story in the database.\nRequires a unique ticket_number and a title; description, status, and priority are optional.\nReturns the created story as JSON."
    )]
    async fn create_story(
        &self,
        Parameters(input): Parameters<CreateStoryInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("create_story", self.handler.create_story(input).await)
    }

    #[tool(
        description = "Update an existing user story identified by ticket_number.\nOnly the provided fields change; at least one of title, description, status, or priority must be given.\nReturns the updated story as JSON."
    )]
    async fn update_story(
        &self,
        Parameters(input): Parameters<UpdateStoryInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("update_story", self.handler.update_story(input).await)
    }

    #[tool(
        description = "Delete a user story by ticket_number.\nReturns the deleted story as JSON so the removal can be audited."
    )]
    async fn delete_story(
        &self,
        Parameters(input): Parameters<DeleteStoryInput>,
    ) -> Result<CallToolResult, McpError> {
        self.respond("delete_story", self.handler.delete_story(input).await)
    }
}

#[tool_handler]
impl ServerHandler for StoryService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "story-mcp-server".to_owned(),
                title: Some("User Story MCP Server".to_owned()),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                icons: None,
                website_url: None,
            },
            instructions: Some(guidance::server_instructions()),
        }
    }
}
