//! Type definitions for console MCP

use thiserror::Error;

// ============================================================================
// Execution Types
// ============================================================================

/// Outcome of a single console invocation
///
/// Produced once per call. A failing process is still an `ExecutionResult`;
/// only validation and configuration problems surface as [`ConsoleError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecutionResult {
    /// Exit code 0 and nothing written to stderr
    pub fn is_clean_success(&self) -> bool {
        self.exit_code == 0 && self.stderr.is_empty()
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// Rejected before spawning: denylisted characters or unparseable quoting
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A setting required by the selected execution mode is absent
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
