//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sets up stderr logging
//! - **Results**: [`text_success`] / [`text_error`] build `CallToolResult`s
//! - **Errors**: [`IntoMcpError`] and helpers for MCP error codes
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::init_tracing;
pub use result::{text_error, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
