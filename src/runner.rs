use anyhow::{Context, Result};
use std::process::ExitStatus;

use crate::command::CommandSpec;

/// Exit code used when the child dies without one (signal) or cannot start
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Run to completion with inherited stdio and return the child's exit code
pub fn run(spec: &CommandSpec) -> Result<i32> {
    let status = spawn_and_wait(spec)?;
    Ok(exit_code(status))
}

pub fn spawn_and_wait(spec: &CommandSpec) -> Result<ExitStatus> {
    spec.to_command()
        .status()
        .with_context(|| format!("failed to launch {}", spec.program.to_string_lossy()))
}

pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(FALLBACK_EXIT_CODE)
}

/// Whether the `cargo watch` subcommand is installed
pub fn cargo_watch_available() -> bool {
    which::which("cargo-watch").is_ok()
}
