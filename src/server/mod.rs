//! MCP server exposing the identifier validators.
//!
//! This module provides the MCP protocol server that lets AI assistants and
//! other MCP clients validate DNI and RUC numbers.

pub mod handlers;
pub mod messages;

pub use handlers::PeIdMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the validator MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects.
///
/// # Arguments
/// * `server` - The configured PeIdMcpServer instance
///
/// # Returns
/// An error if the server fails to start or encounters a fatal error
pub async fn run_server(server: PeIdMcpServer) -> Result<()> {
    // Serve the server with stdio transport
    let service = server.serve(stdio()).await?;

    // Wait for completion
    service.waiting().await?;

    Ok(())
}
