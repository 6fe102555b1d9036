// src/exec/outcome.rs

use std::process::Output;

/// Decoded result of a command that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<Output> for CapturedOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }
    }
}

/// A child process that was started and deliberately not awaited.
///
/// There is no way to get a result back from it; the pid is informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedTask {
    pub program: String,
    pub pid: Option<u32>,
}

/// What a single invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Captured(CapturedOutput),
    Detached(DetachedTask),
    ShellOpened,
}

impl RunOutcome {
    /// Captured stdout, or the empty string for the non-waiting paths.
    pub fn into_stdout(self) -> String {
        match self {
            RunOutcome::Captured(out) => out.stdout,
            RunOutcome::Detached(_) | RunOutcome::ShellOpened => String::new(),
        }
    }
}
