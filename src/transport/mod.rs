//! Transport layer for the MCP server.
//!
//! Stdio is the only transport: the server reads JSON-RPC from stdin and
//! writes responses to stdout, which is how CLI-based MCP clients launch it.

pub mod stdio;

pub use stdio::StdioTransport;

use crate::error::StoryResult;
use std::future::Future;

/// Trait for MCP transport implementations.
pub trait Transport: Send + Sync {
    /// Start the transport and block until it shuts down.
    fn run(&self) -> impl Future<Output = StoryResult<()>> + Send;

    /// Get the name of this transport for logging.
    fn name(&self) -> &'static str;
}
