//! MCP Server implementation for console command execution
//!
//! This module defines the main MCP server that exposes the console as tools.
//! Handler implementations are in the handlers module.

use mcp_common::{
    async_trait, CallToolResult, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError, Tool,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::config::Config;
use crate::executor::ConsoleExecutor;
use crate::handlers;
use crate::params::*;

/// The Console MCP Server
#[derive(Clone)]
pub struct ConsoleMcpServer {
    executor: ConsoleExecutor,
    instructions: String,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl ConsoleMcpServer {
    /// Create a server from an already-parsed config
    pub fn new(config: Config) -> Self {
        let instructions = format!(
            "Executes console commands either locally or inside a docker container. {} \
             Arguments containing ; & | ` $ ( ) are rejected.",
            config.summary()
        );

        Self {
            executor: ConsoleExecutor::new(config),
            instructions,
            tool_router: Self::tool_router(),
        }
    }

    pub fn config(&self) -> &Config {
        self.executor.config()
    }

    #[tool(
        description = "Executes a console command. Runs the configured console binary on the host \
                       (local mode) or inside the configured docker container (docker mode)."
    )]
    async fn execute_console_command(
        &self,
        Parameters(params): Parameters<ExecuteConsoleCommandParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::execute_console_command(&self.executor, params).await
    }

    #[tool(
        description = "Lists available console commands as JSON (runs `list --format=json`). \
                       Behavior depends on the execution mode and console path."
    )]
    async fn list_commands(&self) -> Result<CallToolResult, McpError> {
        handlers::list_commands(&self.executor).await
    }

    #[tool(
        description = "Gets help for a specific console command (runs `<commandName> --help`). \
                       Behavior depends on the execution mode and console path."
    )]
    async fn command_help(
        &self,
        Parameters(params): Parameters<CommandHelpParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::command_help(&self.executor, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for ConsoleMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions.clone()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for ConsoleMcpServer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for ConsoleMcpServer {
    fn server_name(&self) -> &str {
        "console"
    }

    fn server_description(&self) -> Option<&str> {
        Some(self.instructions.as_str())
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "execute_console_command" => {
                let params: ExecuteConsoleCommandParams = serde_json::from_value(params)?;
                self.execute_console_command(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "list_commands" => self.list_commands().await.map_err(Into::into),

            "command_help" => {
                let params: CommandHelpParams = serde_json::from_value(params)?;
                self.command_help(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeddable_server_name() {
        let server = ConsoleMcpServer::default();
        assert_eq!(server.server_name(), "console");
    }

    #[test]
    fn test_embeddable_list_tools() {
        let server = ConsoleMcpServer::default();
        let tools = server.list_tools();

        assert_eq!(tools.len(), 3);

        let tool_names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(tool_names.contains(&"execute_console_command"));
        assert!(tool_names.contains(&"list_commands"));
        assert!(tool_names.contains(&"command_help"));
    }

    #[test]
    fn test_command_help_schema_uses_camel_case() {
        let server = ConsoleMcpServer::default();
        let tool = server
            .list_tools()
            .into_iter()
            .find(|t| t.name == "command_help")
            .unwrap();
        let schema = serde_json::to_value(&*tool.input_schema).unwrap();
        assert!(schema["properties"].get("commandName").is_some());
    }

    #[test]
    fn test_description_reports_configuration() {
        let server = ConsoleMcpServer::new(Config::docker("app_1"));
        assert_eq!(server.config().container_name(), Some("app_1"));

        let description = server.server_description().unwrap();
        assert!(description.contains("docker"));
        assert!(description.contains("app_1"));
        assert!(description.contains("/www/bin/console"));
    }

    #[tokio::test]
    async fn test_embeddable_unknown_tool() {
        let server = ConsoleMcpServer::default();
        let result = server
            .call_tool("nonexistent_tool", serde_json::json!({}))
            .await;

        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_embeddable_missing_argument() {
        let server = ConsoleMcpServer::new(Config::docker("app_1"));
        let result = server
            .call_tool("execute_console_command", serde_json::json!({}))
            .await;

        assert!(matches!(result, Err(EmbeddableError::SerdeError(_))));
    }

    #[tokio::test]
    async fn test_embeddable_wrong_argument_type() {
        let server = ConsoleMcpServer::new(Config::docker("app_1"));
        let result = server
            .call_tool("command_help", serde_json::json!({ "commandName": 42 }))
            .await;

        assert!(matches!(result, Err(EmbeddableError::SerdeError(_))));
    }

    #[tokio::test]
    async fn test_embeddable_denied_characters() {
        let server = ConsoleMcpServer::new(Config::docker("app_1"));
        let result = server
            .call_tool(
                "execute_console_command",
                serde_json::json!({ "command": "list | sh" }),
            )
            .await;

        match result {
            Err(EmbeddableError::InvalidParams(message)) => {
                assert!(message.contains("invalid characters"))
            }
            other => panic!("expected invalid params, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_embeddable_error_classes_stay_distinct() {
        // Unconfigured: denied characters are still the caller's fault,
        // clean arguments hit the missing container instead.
        let server = ConsoleMcpServer::default();

        let denied = server
            .call_tool("execute_console_command", serde_json::json!({ "command": "a;b" }))
            .await;
        assert!(matches!(denied, Err(EmbeddableError::InvalidParams(_))));

        let unconfigured = server
            .call_tool("execute_console_command", serde_json::json!({ "command": "ab" }))
            .await;
        match unconfigured {
            Err(EmbeddableError::McpError(message)) => {
                assert!(message.contains("CONTAINER_NAME"))
            }
            other => panic!("expected MCP error, got {:?}", other.map(|_| ())),
        }
    }
}
