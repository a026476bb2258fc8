//! Error handling utilities for MCP servers
//!
//! Servers implement [`IntoMcpError`] for their domain error type and use
//! [`ResultExt::to_mcp_err`] at the tool boundary.

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Conversion from a server's own error type into an MCP error
///
/// ```rust,ignore
/// impl IntoMcpError for MyError {
///     fn into_mcp_error(self) -> McpError {
///         match self {
///             MyError::BadInput(msg) => invalid_params(msg),
///             other => internal_error(other.to_string()),
///         }
///     }
/// }
/// ```
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

/// Extension trait adding `to_mcp_err()` to any `Result` whose error
/// implements [`IntoMcpError`]
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> McpResult<T>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> McpResult<T> {
        self.map_err(|e| e.into_mcp_error())
    }
}

/// Internal error: the server could not carry out a well-formed request
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Invalid params: the request itself is at fault
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    enum LookupError {
        Missing(String),
        Unavailable,
    }

    impl IntoMcpError for LookupError {
        fn into_mcp_error(self) -> McpError {
            match self {
                LookupError::Missing(name) => invalid_params(format!("no such entry: {}", name)),
                LookupError::Unavailable => internal_error("backend unavailable"),
            }
        }
    }

    #[test]
    fn test_result_ext_uses_domain_mapping() {
        let result: Result<(), LookupError> = Err(LookupError::Missing("cache:clear".into()));
        let err = result.to_mcp_err().unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("cache:clear"));

        let result: Result<(), LookupError> = Err(LookupError::Unavailable);
        assert_eq!(result.to_mcp_err().unwrap_err().code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_result_ext_passes_ok_through() {
        let result: Result<u8, LookupError> = Ok(7);
        assert_eq!(result.to_mcp_err().unwrap(), 7);
    }

    #[test]
    fn test_internal_error() {
        let err = internal_error("test");
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("test"));
    }

    #[test]
    fn test_invalid_params() {
        let err = invalid_params("bad param");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("bad param"));
    }
}
