//! Result helpers for MCP tool responses
//!
//! Every response built here carries a single text content item; the only
//! difference is the `is_error` flag.

use rmcp::model::{CallToolResult, Content};

/// Text response with `is_error = false`
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Text response with `is_error = true`
///
/// For tool-level failures the client should see as output (a command that
/// ran and failed) rather than as a protocol error.
pub fn text_error(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_success() {
        let result = text_success("hello world");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_text_error() {
        let result = text_error("Exit Code: 1");
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_empty_text_is_kept() {
        let result = text_success("");
        assert_eq!(result.content.len(), 1);
    }
}
