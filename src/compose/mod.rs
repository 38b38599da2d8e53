//! docker-compose invocation building and execution

use anyhow::{Context, Result};
use std::process::Command;

/// The orchestration binary every command vector starts with.
pub const COMPOSE_BINARY: &str = "docker-compose";

/// Build the command vector that starts a compose file in detached mode.
pub fn up_command(path: &str) -> Vec<String> {
    vec![
        COMPOSE_BINARY.to_string(),
        "-f".to_string(),
        path.to_string(),
        "up".to_string(),
        "-d".to_string(),
    ]
}

/// Build the command vector that stops a running compose file.
pub fn stop_command(path: &str) -> Vec<String> {
    vec![
        COMPOSE_BINARY.to_string(),
        "-f".to_string(),
        path.to_string(),
        "stop".to_string(),
    ]
}

/// Process-execution seam for the registry's run/stop actions.
///
/// The registry only hands over a command vector; it never inspects what
/// the subprocess did beyond whether it could be launched at all.
pub trait ComposeRunner {
    fn execute(&mut self, command: &[String]) -> Result<()>;
}

/// Runs command vectors as real subprocesses, blocking until exit.
///
/// The exit status is not interpreted; docker-compose reports its own
/// failures on the inherited stdio.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ComposeRunner for ProcessRunner {
    fn execute(&mut self, command: &[String]) -> Result<()> {
        let (binary, args) = command
            .split_first()
            .context("empty command vector")?;

        Command::new(binary)
            .args(args)
            .status()
            .with_context(|| format!("failed to launch {binary}"))?;

        Ok(())
    }
}
