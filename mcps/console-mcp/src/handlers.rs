//! Tool handlers
//!
//! Each handler derives the console arguments for its tool, runs them through
//! the executor, and formats the outcome. Validation and configuration errors
//! become MCP errors; a failing console run is an error-flagged result.

use mcp_common::{
    internal_error, invalid_params, CallToolResult, IntoMcpError, McpError, McpResult, ResultExt,
};
use tracing::error;

use crate::executor::ConsoleExecutor;
use crate::format::{format_json_result, format_result};
use crate::params::*;
use crate::types::ConsoleError;

/// Arguments used to ask the console for its command listing
pub const LIST_COMMANDS_ARGS: &str = "list --format=json";

// ============================================================================
// Error Mapping and Helpers
// ============================================================================

/// Bad arguments are the caller's fault; missing configuration is a
/// deployment problem and is reported as a generic internal error.
impl IntoMcpError for ConsoleError {
    fn into_mcp_error(self) -> McpError {
        match &self {
            ConsoleError::InvalidArgument(_) => invalid_params(self.to_string()),
            ConsoleError::MissingConfig(_) => {
                error!("{}", self);
                internal_error(self.to_string())
            }
        }
    }
}

/// Arguments for `<command_name> --help`
pub fn help_args(command_name: &str) -> String {
    format!("{} --help", command_name)
}

// ============================================================================
// Handler Functions
// ============================================================================

pub async fn execute_console_command(
    executor: &ConsoleExecutor,
    params: ExecuteConsoleCommandParams,
) -> McpResult<CallToolResult> {
    let result = executor
        .execute(&params.command)
        .await
        .to_mcp_err()?;

    Ok(format_result(&result).into())
}

pub async fn list_commands(executor: &ConsoleExecutor) -> McpResult<CallToolResult> {
    let result = executor
        .execute(LIST_COMMANDS_ARGS)
        .await
        .to_mcp_err()?;

    Ok(format_json_result(&result).into())
}

pub async fn command_help(
    executor: &ConsoleExecutor,
    params: CommandHelpParams,
) -> McpResult<CallToolResult> {
    let result = executor
        .execute(&help_args(&params.command_name))
        .await
        .to_mcp_err()?;

    Ok(format_result(&result).into())
}
