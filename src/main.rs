//! Story MCP Server - Main entry point.
//!
//! This server provides MCP (Model Context Protocol) tools for AI assistants
//! to read and manage a user-story table for test case generation.
//! Stdout belongs to the protocol, so all logging is routed to stderr.

use clap::Parser;
use std::sync::Arc;
use story_mcp_server::config::Config;
use story_mcp_server::db::{DbPool, StoryStore};
use story_mcp_server::transport::{StdioTransport, Transport};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse configuration from command line and environment
    let config = Config::parse();

    init_tracing(&config);

    config.validate_table_name()?;

    info!(
        "Starting Story MCP Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Connect and verify before announcing the server over stdio
    let pool = DbPool::connect(&config).await?;
    pool.ping().await?;

    let store = Arc::new(StoryStore::new(pool, config.table.clone())?);
    info!(
        engine = store.pool().engine(),
        table = store.table(),
        max_connections = config.max_connections,
        "Database connection established"
    );

    let transport = StdioTransport::new(store);
    info!(transport = transport.name(), "Using stdio transport");
    if let Err(e) = transport.run().await {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}
