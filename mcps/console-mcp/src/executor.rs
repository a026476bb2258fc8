//! Console command executor
//!
//! Validates console arguments, resolves the execution target, and runs the
//! resulting argument vector to completion. Process failures are returned as
//! [`ExecutionResult`] values; only validation and configuration problems
//! are errors, and both are raised before anything is spawned.
//!
//! # Example
//!
//! ```rust,ignore
//! use console_mcp::{Config, ConsoleExecutor};
//!
//! let executor = ConsoleExecutor::new(Config::docker("app_1"));
//! let result = executor.execute("cache:clear").await?;
//! println!("exit code {}", result.exit_code);
//! ```

use std::process::Stdio;

use tokio::process::Command;
use tracing::{error, info, instrument, warn};

use crate::config::Config;
use crate::guard;
use crate::target::{CommandLine, ExecutionTarget};
use crate::types::{ConsoleResult, ExecutionResult};

/// Exit code reported when the process ends without one (e.g. killed by a signal)
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Exit code reported when the program could not be found
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

#[derive(Debug, Clone)]
pub struct ConsoleExecutor {
    config: Config,
}

impl ConsoleExecutor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate `command_args` and build the command line without running it
    pub fn prepare(&self, command_args: &str) -> ConsoleResult<CommandLine> {
        let args = guard::split_args(command_args)?;
        let target = ExecutionTarget::resolve(&self.config)?;
        Ok(target.command_line(args))
    }

    /// Run the console with `command_args` and capture its outcome
    ///
    /// No timeout is applied: the call completes when the process exits.
    #[instrument(skip(self))]
    pub async fn execute(&self, command_args: &str) -> ConsoleResult<ExecutionResult> {
        let command_line = self.prepare(command_args)?;
        info!("Executing: {}", command_line);
        Ok(run(&command_line).await)
    }
}

async fn run(command_line: &CommandLine) -> ExecutionResult {
    let output = Command::new(&command_line.program)
        .args(&command_line.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await;

    match output {
        Ok(output) => {
            let result = ExecutionResult {
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                exit_code: output.status.code().unwrap_or(FALLBACK_EXIT_CODE),
            };
            if !output.status.success() {
                warn!(
                    exit_code = result.exit_code,
                    stderr = %result.stderr,
                    "Console command failed"
                );
            }
            result
        }
        Err(e) => {
            error!(command = %command_line, "Error executing command: {}", e);
            let exit_code = if e.kind() == std::io::ErrorKind::NotFound {
                NOT_FOUND_EXIT_CODE
            } else {
                FALLBACK_EXIT_CODE
            };
            ExecutionResult {
                stdout: String::new(),
                stderr: format!("failed to spawn {}: {}", command_line.program, e),
                exit_code,
            }
        }
    }
}
