//! Console MCP - runs a project console binary on the host or in a container
//!
//! Configured by `EXECUTION_MODE` (local or docker), `CONTAINER_NAME` (docker
//! mode) and `PATH_CONSOLE`, or the equivalent command-line flags.
//!
//! Configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "console": {
//!       "command": "console-mcp",
//!       "env": { "CONTAINER_NAME": "app_1" }
//!     }
//!   }
//! }
//! ```

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};

use console_mcp::{Config, ConsoleMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    mcp_common::init_tracing("console_mcp")?;

    tracing::info!("Starting console MCP Server");
    tracing::info!("{}", config.summary());

    let server = ConsoleMcpServer::new(config);
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
