//! Subprocess execution behind a narrow trait so the pipeline can be
//! exercised with canned outputs instead of real git/circleci binaries.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Result, TriggerError};

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args`, optionally in `cwd`, and returns stdout
    /// decoded as UTF-8 with surrounding whitespace stripped. A non-zero
    /// exit is an error carrying the captured stderr.
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<String>;
}

/// Real runner over `tokio::process::Command`.
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<String> {
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        tracing::debug!(program, ?args, "running command");
        let output = cmd.output().await?;

        if !output.status.success() {
            return Err(TriggerError::Process {
                program: program.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| TriggerError::Parse(format!("{program} produced non-UTF-8 output")))?;
        Ok(stdout.trim().to_string())
    }
}
