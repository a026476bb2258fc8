//! Response formatting
//!
//! Maps an [`ExecutionResult`] onto the text + error flag handed back to the
//! MCP client. Only a clean success (exit code 0, empty stderr) returns bare
//! stdout; everything else is rendered with exit code, stdout and stderr and
//! flagged as an error, so warnings written to stderr are never swallowed.

use mcp_common::{text_error, text_success, CallToolResult};
use tracing::warn;

use crate::types::ExecutionResult;

/// Text payload plus error flag for a tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    pub text: String,
    pub is_error: bool,
}

impl ToolResponse {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl From<ToolResponse> for CallToolResult {
    fn from(response: ToolResponse) -> Self {
        if response.is_error {
            text_error(response.text)
        } else {
            text_success(response.text)
        }
    }
}

/// Standard formatting for any console invocation
pub fn format_result(result: &ExecutionResult) -> ToolResponse {
    if result.is_clean_success() {
        return ToolResponse::success(result.stdout.clone());
    }

    ToolResponse::error(format!(
        "Exit Code: {}\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
        result.exit_code, result.stdout, result.stderr
    ))
}

/// Formatting for invocations whose clean output must be JSON
///
/// A clean run with unparseable stdout is downgraded to an error carrying the
/// parse failure and the raw output. Non-clean runs format as usual.
pub fn format_json_result(result: &ExecutionResult) -> ToolResponse {
    if !result.is_clean_success() {
        return format_result(result);
    }

    match serde_json::from_str::<serde_json::Value>(&result.stdout) {
        Ok(_) => ToolResponse::success(result.stdout.clone()),
        Err(e) => {
            warn!("Failed to parse list_commands output as JSON: {}", e);
            ToolResponse::error(format!(
                "Failed to parse JSON output:\n{}\n\nRaw Output:\n{}",
                e, result.stdout
            ))
        }
    }
}
