// src/exec/runner.rs

//! The command runner: one external process, scoped to a working directory.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::{LauncherError, Result};
use crate::output::{timestamp, OutputSink};

use super::backend::{ProcessBackend, TokioProcessBackend};
use super::invocation::CommandInvocation;
use super::outcome::{CapturedOutput, DetachedTask, RunOutcome};
use super::workdir::WorkingDirGuard;

/// Runs [`CommandInvocation`]s and echoes them to an [`OutputSink`].
///
/// Every path below changes into the invocation's working directory first
/// and restores the previous one before returning, on success and on error.
#[derive(Clone)]
pub struct CommandRunner {
    backend: Arc<dyn ProcessBackend>,
    sink: Arc<dyn OutputSink>,
}

impl CommandRunner {
    pub fn new(backend: Arc<dyn ProcessBackend>, sink: Arc<dyn OutputSink>) -> Self {
        Self { backend, sink }
    }

    /// Runner backed by real OS processes.
    pub fn with_sink(sink: Arc<dyn OutputSink>) -> Self {
        Self::new(Arc::new(TokioProcessBackend::new()), sink)
    }

    pub fn sink(&self) -> &Arc<dyn OutputSink> {
        &self.sink
    }

    /// Run an invocation and return its captured stdout.
    ///
    /// Shell-open and detached invocations return an empty string. A
    /// non-zero exit code is not an error; only failing to enter the working
    /// directory or to launch the program is.
    pub async fn run(&self, invocation: &CommandInvocation) -> Result<String> {
        Ok(self.execute(invocation).await?.into_stdout())
    }

    /// Dispatch to [`shell_open`](Self::shell_open),
    /// [`capture`](Self::capture) or [`spawn_detached`](Self::spawn_detached).
    pub async fn execute(&self, invocation: &CommandInvocation) -> Result<RunOutcome> {
        if invocation.is_shell_open() {
            self.shell_open(invocation).await?;
            Ok(RunOutcome::ShellOpened)
        } else if invocation.waits_for_exit() {
            Ok(RunOutcome::Captured(self.capture(invocation).await?))
        } else {
            Ok(RunOutcome::Detached(self.spawn_detached(invocation).await?))
        }
    }

    /// Run to completion, capturing stdout and stderr.
    pub async fn capture(&self, invocation: &CommandInvocation) -> Result<CapturedOutput> {
        let _cwd = WorkingDirGuard::enter(invocation.working_dir()).await?;
        self.announce(invocation);

        let program = invocation.program();
        let output = self
            .backend
            .output(program, invocation.args())
            .await
            .map_err(|source| LauncherError::Spawn {
                program: program.to_string(),
                source,
            })?;

        info!(
            tokens = %invocation,
            exit_code = ?output.exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "command finished"
        );

        if !output.stdout.is_empty() {
            self.sink.print_out(output.stdout.trim_end_matches(['\r', '\n']));
        }
        if !output.stderr.is_empty() {
            self.sink.print_out("stderr:");
            self.sink.print_out(output.stderr.trim_end_matches(['\r', '\n']));
        }

        Ok(output)
    }

    /// Start the program and return without waiting for it.
    pub async fn spawn_detached(&self, invocation: &CommandInvocation) -> Result<DetachedTask> {
        let _cwd = WorkingDirGuard::enter(invocation.working_dir()).await?;
        self.announce(invocation);

        let program = invocation.program();
        let task = self
            .backend
            .spawn_detached(program, invocation.args())
            .map_err(|source| LauncherError::Spawn {
                program: program.to_string(),
                source,
            })?;

        info!(tokens = %invocation, pid = ?task.pid, "detached process started");
        Ok(task)
    }

    /// Hand everything after the `start` directive to the platform opener.
    ///
    /// Fire-and-forget: a failing opener is logged and otherwise ignored.
    /// Only a missing working directory is reported.
    pub async fn shell_open(&self, invocation: &CommandInvocation) -> Result<()> {
        let _cwd = WorkingDirGuard::enter(invocation.working_dir()).await?;
        self.announce(invocation);

        let targets = if invocation.is_shell_open() {
            invocation.args()
        } else {
            invocation.tokens()
        };

        if let Err(e) = self.backend.shell_open(targets) {
            warn!(tokens = %invocation, error = %e, "platform opener failed");
        }
        Ok(())
    }

    fn announce(&self, invocation: &CommandInvocation) {
        info!(
            tokens = %invocation,
            cwd = %invocation.working_dir().display(),
            wait_for_exit = invocation.waits_for_exit(),
            "running command"
        );
        self.sink
            .print_out(&format!("{} - {}", timestamp(), invocation));
    }
}
