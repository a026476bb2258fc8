//! Server configuration
//!
//! Built once at startup from command-line flags, each of which falls back to
//! the environment variable of the same meaning. Nothing here is validated up
//! front: settings required by the chosen mode are checked when a target is
//! resolved for a call, so a misconfigured server still starts and reports the
//! problem per tool call.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use clap::Parser;

/// Console location used inside the container when none is configured
pub const DEFAULT_CONTAINER_CONSOLE_PATH: &str = "/www/bin/console";

/// Program used to reach into the container
pub const DEFAULT_DOCKER_BINARY: &str = "docker";

/// Where the console binary runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Directly on the host
    Local,
    /// Inside a container via `docker exec`
    #[default]
    Docker,
}

impl FromStr for ExecutionMode {
    type Err = Infallible;

    /// Only the exact value `local` selects host execution; anything else
    /// means container mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "local" => ExecutionMode::Local,
            _ => ExecutionMode::Docker,
        })
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Local => f.write_str("local"),
            ExecutionMode::Docker => f.write_str("docker"),
        }
    }
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "console-mcp")]
#[command(version)]
#[command(about = "MCP server exposing a project console binary, locally or inside a docker container")]
pub struct Config {
    /// Execution mode: "local" runs on the host, anything else uses docker
    #[arg(long, env = "EXECUTION_MODE", default_value = "docker")]
    pub execution_mode: ExecutionMode,

    /// Container to exec into (required in docker mode)
    #[arg(long, env = "CONTAINER_NAME")]
    pub container_name: Option<String>,

    /// Path to the console binary (required in local mode, defaults to /www/bin/console in docker mode)
    #[arg(long, env = "PATH_CONSOLE")]
    pub console_path: Option<String>,

    /// Docker CLI used for container execution
    #[arg(long, env = "DOCKER_BINARY", default_value = DEFAULT_DOCKER_BINARY)]
    pub docker_binary: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::default(),
            container_name: None,
            console_path: None,
            docker_binary: DEFAULT_DOCKER_BINARY.to_string(),
        }
    }
}

impl Config {
    /// Local-mode config running the given console binary
    pub fn local(console_path: impl Into<String>) -> Self {
        Self {
            execution_mode: ExecutionMode::Local,
            console_path: Some(console_path.into()),
            ..Self::default()
        }
    }

    /// Docker-mode config targeting the given container
    pub fn docker(container_name: impl Into<String>) -> Self {
        Self {
            execution_mode: ExecutionMode::Docker,
            container_name: Some(container_name.into()),
            ..Self::default()
        }
    }

    pub fn with_console_path(mut self, path: impl Into<String>) -> Self {
        self.console_path = Some(path.into());
        self
    }

    pub fn with_docker_binary(mut self, binary: impl Into<String>) -> Self {
        self.docker_binary = binary.into();
        self
    }

    /// Container name, treating an empty value as unset
    pub fn container_name(&self) -> Option<&str> {
        non_empty(self.container_name.as_deref())
    }

    /// Console path, treating an empty value as unset
    pub fn console_path(&self) -> Option<&str> {
        non_empty(self.console_path.as_deref())
    }

    /// Human-readable description of the effective settings
    pub fn summary(&self) -> String {
        match self.execution_mode {
            ExecutionMode::Docker => format!(
                "Execution mode: docker. Container: {}. Console path: {}.",
                self.container_name().unwrap_or("(CONTAINER_NAME not set)"),
                self.console_path().unwrap_or(DEFAULT_CONTAINER_CONSOLE_PATH),
            ),
            ExecutionMode::Local => format!(
                "Execution mode: local. Console path: {}.",
                self.console_path().unwrap_or("(PATH_CONSOLE not set)"),
            ),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("local".parse::<ExecutionMode>().unwrap(), ExecutionMode::Local);
        assert_eq!("docker".parse::<ExecutionMode>().unwrap(), ExecutionMode::Docker);
        assert_eq!("kubernetes".parse::<ExecutionMode>().unwrap(), ExecutionMode::Docker);
        assert_eq!("".parse::<ExecutionMode>().unwrap(), ExecutionMode::Docker);
    }

    #[test]
    fn test_default_is_docker_without_settings() {
        let config = Config::default();
        assert_eq!(config.execution_mode, ExecutionMode::Docker);
        assert!(config.container_name().is_none());
        assert!(config.console_path().is_none());
        assert_eq!(config.docker_binary, "docker");
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "console-mcp",
            "--execution-mode",
            "local",
            "--console-path",
            "bin/console",
        ])
        .unwrap();
        assert_eq!(config.execution_mode, ExecutionMode::Local);
        assert_eq!(config.console_path(), Some("bin/console"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = Config::docker("  ").with_console_path("");
        assert!(config.container_name().is_none());
        assert!(config.console_path().is_none());
    }

    #[test]
    fn test_summary_mentions_defaults() {
        let summary = Config::docker("app_1").summary();
        assert!(summary.contains("app_1"));
        assert!(summary.contains(DEFAULT_CONTAINER_CONSOLE_PATH));

        let summary = Config {
            execution_mode: ExecutionMode::Local,
            ..Config::default()
        }
        .summary();
        assert!(summary.contains("PATH_CONSOLE not set"));
    }
}
