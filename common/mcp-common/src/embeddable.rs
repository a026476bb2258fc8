//! In-process tool invocation
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! transport in between. Argument decoding happens in `call_tool`, so a bad
//! argument object surfaces as [`EmbeddableError::SerdeError`]; a tool that
//! rejects decoded arguments surfaces as [`EmbeddableError::InvalidParams`].
//!
//! ```rust,ignore
//! use console_mcp::{Config, ConsoleMcpServer};
//! use mcp_common::EmbeddableMcp;
//!
//! let server = ConsoleMcpServer::new(Config::docker("app_1"));
//! let result = server
//!     .call_tool("command_help", serde_json::json!({ "commandName": "cache:clear" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, ErrorCode, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with this name
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Tool arguments did not decode into the tool's parameter type
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// The tool rejected its arguments (MCP `invalid_params`)
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Any other MCP error returned by the tool
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        if err.code == ErrorCode::INVALID_PARAMS {
            EmbeddableError::InvalidParams(err.message.to_string())
        } else {
            EmbeddableError::McpError(err.message.to_string())
        }
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// MCP server whose tools can be called in-process
///
/// Implementations are `Send + Sync`; tool calls may run concurrently.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All tools with their input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Call `name` with a JSON object of arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
