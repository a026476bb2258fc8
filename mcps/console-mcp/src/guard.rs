//! Argument guard - validation layer for console arguments
//!
//! Rejects argument strings carrying shell metacharacters, then splits the
//! remainder into an argument vector. Processes are spawned without a shell;
//! the denylist applies regardless.

use crate::types::{ConsoleError, ConsoleResult};

/// Characters used for chaining, piping and substitution in POSIX shells
pub const DENIED_CHARS: &[char] = &[';', '&', '|', '`', '$', '(', ')'];

/// Fail if `args` contains any denylisted character
pub fn check_args(args: &str) -> ConsoleResult<()> {
    if let Some(c) = args.chars().find(|c| DENIED_CHARS.contains(c)) {
        return Err(ConsoleError::InvalidArgument(format!(
            "invalid characters detected in command arguments ('{}')",
            c
        )));
    }
    Ok(())
}

/// Validate `args` and split them into words using shell quoting rules
///
/// An empty or whitespace-only string yields no words.
pub fn split_args(args: &str) -> ConsoleResult<Vec<String>> {
    check_args(args)?;

    shlex::split(args).ok_or_else(|| {
        ConsoleError::InvalidArgument("unbalanced quotes in command arguments".to_string())
    })
}
