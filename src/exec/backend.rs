// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! The [`CommandRunner`](super::CommandRunner) talks to a `ProcessBackend`
//! instead of `tokio::process` directly. This makes it easy to swap in a fake
//! backend in tests while keeping the production implementation here.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::outcome::{CapturedOutput, DetachedTask};

/// Trait abstracting how processes are started.
///
/// All methods resolve relative paths against the current working directory
/// at the time they are called; the runner takes care of scoping it.
pub trait ProcessBackend: Send + Sync {
    /// Run `program` to completion and capture stdout and stderr.
    fn output<'a>(
        &'a self,
        program: &'a str,
        args: &'a [String],
    ) -> Pin<Box<dyn Future<Output = io::Result<CapturedOutput>> + Send + 'a>>;

    /// Start `program` and return without waiting for it.
    fn spawn_detached(&self, program: &str, args: &[String]) -> io::Result<DetachedTask>;

    /// Hand `targets` to the platform's "open" mechanism.
    fn shell_open(&self, targets: &[String]) -> io::Result<()>;
}

/// Real backend built on `tokio::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct TokioProcessBackend;

impl TokioProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessBackend for TokioProcessBackend {
    fn output<'a>(
        &'a self,
        program: &'a str,
        args: &'a [String],
    ) -> Pin<Box<dyn Future<Output = io::Result<CapturedOutput>> + Send + 'a>> {
        Box::pin(async move {
            let output = Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .output()
                .await?;
            Ok(CapturedOutput::from(output))
        })
    }

    fn spawn_detached(&self, program: &str, args: &[String]) -> io::Result<DetachedTask> {
        // The child handle is dropped on purpose: without `kill_on_drop` the
        // process keeps running and tokio reaps it once it exits.
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let pid = child.id();
        debug!(program, ?pid, "spawned detached process");

        Ok(DetachedTask {
            program: program.to_string(),
            pid,
        })
    }

    fn shell_open(&self, targets: &[String]) -> io::Result<()> {
        let (opener, opener_args) = platform_opener();
        let mut cmd = Command::new(opener);
        cmd.args(opener_args)
            .args(targets)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn()?;
        debug!(opener, ?targets, pid = ?child.id(), "handed targets to platform opener");
        Ok(())
    }
}

/// Program and leading arguments of the platform opener.
///
/// On Windows `start` is a `cmd` builtin; the empty string fills its
/// window-title slot so a quoted first target is not taken as a title.
pub fn platform_opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(windows) {
        ("cmd", &["/C", "start", ""])
    } else if cfg!(target_os = "macos") {
        ("open", &[])
    } else {
        ("xdg-open", &[])
    }
}
