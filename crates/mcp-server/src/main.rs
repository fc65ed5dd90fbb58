//! Text Intel MCP Server
//!
//! Exposes deterministic text analysis to AI agents via MCP protocol.
//!
//! ## Tools
//!
//! - `extract_outcomes` - Extract explicit decisions, action items, and open questions
//! - `trim_context` - Reduce text to the minimum context needed for a goal
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "text-intel": {
//!       "command": "text-intel-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::TextIntelService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Text Intel MCP server");

    // Create and start the MCP server
    let service = TextIntelService::new();
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Text Intel MCP server stopped");
    Ok(())
}
