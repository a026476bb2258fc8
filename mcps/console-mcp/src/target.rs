//! Execution target resolution
//!
//! A pure function of [`Config`]: evaluated on every call, never cached.

use std::borrow::Cow;
use std::fmt;

use crate::config::{Config, ExecutionMode, DEFAULT_CONTAINER_CONSOLE_PATH};
use crate::types::{ConsoleError, ConsoleResult};

/// Where and how the console binary is run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionTarget {
    Local {
        binary_path: String,
    },
    Container {
        docker_binary: String,
        container_name: String,
        binary_path: String,
    },
}

impl ExecutionTarget {
    /// Resolve the target for the configured mode
    ///
    /// Local mode needs a console path. Docker mode needs a container name
    /// and falls back to `/www/bin/console` for the console path.
    pub fn resolve(config: &Config) -> ConsoleResult<Self> {
        match config.execution_mode {
            ExecutionMode::Local => {
                let binary_path = config.console_path().ok_or_else(|| {
                    ConsoleError::MissingConfig(
                        "PATH_CONSOLE is required for local execution mode".to_string(),
                    )
                })?;
                Ok(ExecutionTarget::Local {
                    binary_path: binary_path.to_string(),
                })
            }
            ExecutionMode::Docker => {
                let container_name = config.container_name().ok_or_else(|| {
                    ConsoleError::MissingConfig(
                        "CONTAINER_NAME is required for docker execution mode".to_string(),
                    )
                })?;
                Ok(ExecutionTarget::Container {
                    docker_binary: config.docker_binary.clone(),
                    container_name: container_name.to_string(),
                    binary_path: config
                        .console_path()
                        .unwrap_or(DEFAULT_CONTAINER_CONSOLE_PATH)
                        .to_string(),
                })
            }
        }
    }

    /// Build the full argument vector for running `console_args` on this target
    pub fn command_line(&self, console_args: Vec<String>) -> CommandLine {
        match self {
            ExecutionTarget::Local { binary_path } => CommandLine {
                program: binary_path.clone(),
                args: console_args,
            },
            ExecutionTarget::Container {
                docker_binary,
                container_name,
                binary_path,
            } => {
                let mut args = Vec::with_capacity(console_args.len() + 3);
                args.push("exec".to_string());
                args.push(container_name.clone());
                args.push(binary_path.clone());
                args.extend(console_args);
                CommandLine {
                    program: docker_binary.clone(),
                    args,
                }
            }
        }
    }
}

/// A program plus its arguments, spawned without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

/// Renders as a shell-readable line: words that would split or vanish when
/// re-read are quoted, everything else is written as is.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_word(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", display_word(arg))?;
        }
        Ok(())
    }
}

fn display_word(word: &str) -> Cow<'_, str> {
    let needs_quoting = word.is_empty()
        || word
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\'));
    if !needs_quoting {
        return Cow::Borrowed(word);
    }
    // Only a NUL byte makes quoting fail, and no spawned argument can hold one.
    shlex::try_quote(word).unwrap_or(Cow::Borrowed(word))
}
