//! Parameter types for console MCP tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExecuteConsoleCommandParams {
    #[schemars(description = "The bin/console command arguments to execute (e.g., 'cache:clear')")]
    pub command: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CommandHelpParams {
    #[schemars(description = "The name of the command to get help for")]
    #[serde(rename = "commandName")]
    pub command_name: String,
}
