//! Console MCP Library
//!
//! Exposes a project console binary (Symfony-style `bin/console`) as MCP tools.
//! Commands run either directly on the host or inside a docker container via
//! `docker exec`, and their output is returned as a tool result.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use console_mcp::{Config, ConsoleMcpServer, EmbeddableMcp};
//!
//! let server = ConsoleMcpServer::new(Config::docker("app_1"));
//! let result = server
//!     .call_tool("execute_console_command", serde_json::json!({ "command": "cache:clear" }))
//!     .await?;
//! ```
//!
//! # Tools
//! - `execute_console_command`: run arbitrary console arguments
//! - `list_commands`: `list --format=json`, validated as JSON
//! - `command_help`: `<commandName> --help`

pub mod config;
pub mod executor;
pub mod format;
pub mod guard;
pub mod handlers;
pub mod params;
pub mod server;
pub mod target;
pub mod types;

// Re-export main server type
pub use server::ConsoleMcpServer;

pub use config::{Config, ExecutionMode};
pub use executor::ConsoleExecutor;
pub use format::ToolResponse;
pub use target::{CommandLine, ExecutionTarget};
pub use types::{ConsoleError, ExecutionResult};

// Re-export parameter types for direct API usage
pub use params::*;

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
