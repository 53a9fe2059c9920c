//! Stdio transport for the MCP server.
//!
//! Reads JSON-RPC messages from stdin and writes responses to stdout, so all
//! logging in this process goes to stderr. Shutdown is graceful: a closed
//! stdin or a first signal lets in-flight tool calls finish and drains the
//! pool; a second signal forces an immediate exit.

use crate::db::StoryStore;
use crate::error::{StoryError, StoryResult};
use crate::mcp::StoryService;
use crate::transport::Transport;
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

pub struct StdioTransport {
    store: Arc<StoryStore>,
}

impl StdioTransport {
    pub fn new(store: Arc<StoryStore>) -> Self {
        Self { store }
    }
}

impl Transport for StdioTransport {
    async fn run(&self) -> StoryResult<()> {
        info!("Starting MCP server with stdio transport");

        let service = StoryService::new(self.store.clone());

        let transport = stdio();
        let running_service = service.serve(transport).await.map_err(|e| {
            StoryError::config(format!("Failed to start stdio transport: {}", e))
        })?;

        let shutdown_requested = tokio::select! {
            result = running_service.waiting() => {
                match result {
                    Ok(_quit_reason) => {
                        info!("Stdio transport completed normally");
                    }
                    Err(e) => {
                        warn!(error = %e, "Stdio transport error");
                        return Err(StoryError::Database {
                            message: format!("Stdio transport error: {}", e),
                        });
                    }
                }
                false
            }
            _ = wait_for_signal() => {
                info!("Shutdown signal received (send again to force exit)");
                true
            }
        };

        if shutdown_requested {
            // Second signal forces exit without waiting for the drain
            tokio::spawn(async {
                wait_for_signal().await;
                warn!("Received second signal, forcing immediate exit");
                std::process::exit(1);
            });
        }

        info!("Closing database connections");
        self.store.pool().close().await;

        if shutdown_requested {
            // Force exit since stdio may still be blocking on stdin;
            // tokio::select! cannot interrupt blocking stdin reads
            info!("Exiting process");
            std::process::exit(0);
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "stdio"
    }
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn wait_for_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT");
        }
        _ = terminate => {
            info!("Received SIGTERM");
        }
    }
}
