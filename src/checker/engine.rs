//! Invocation of the external cspell process.

use crate::Settings;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Flags that make cspell print bare unknown words and nothing else.
pub const ENGINE_FLAGS: &[&str] = &["--unique", "--words-only", "--no-summary", "--no-progress"];

/// Captured result of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Build the engine command line for `target` (a path or a glob).
pub fn build_command(settings: &Settings, target: &str) -> Result<Command> {
    let (program, leading) = settings
        .engine
        .split_first()
        .context("No engine program configured")?;

    let mut cmd = Command::new(program);
    cmd.args(leading)
        .arg(target)
        .args(ENGINE_FLAGS)
        .arg("--config")
        .arg(&settings.dictionary)
        .args(&settings.extra_args);
    Ok(cmd)
}

/// Render a command for log and error messages.
pub fn describe(cmd: &Command) -> String {
    let mut parts: Vec<OsString> = vec![cmd.get_program().to_os_string()];
    parts.extend(cmd.get_args().map(|a| a.to_os_string()));
    parts
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the engine to completion, capturing both streams.
#[instrument(skip_all, fields(command = %describe(&cmd)))]
pub fn run(mut cmd: Command) -> Result<EngineOutput> {
    debug!("spawning engine");
    cmd.stdin(Stdio::null());
    let output = cmd
        .output()
        .with_context(|| format!("Failed to run `{}`", describe(&cmd)))?;

    let result = EngineOutput {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    debug!(
        exit_code = ?result.code,
        stdout_bytes = output.stdout.len(),
        stderr_bytes = output.stderr.len(),
        "engine finished"
    );
    Ok(result)
}
