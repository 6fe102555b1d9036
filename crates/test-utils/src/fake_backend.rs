use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use launcher::exec::{CapturedOutput, DetachedTask, ProcessBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Output,
    Detached,
    ShellOpen,
}

/// One call the runner made into the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCall {
    pub kind: CallKind,
    pub program: String,
    pub args: Vec<String>,
    /// Working directory observed while the call was made.
    pub cwd: PathBuf,
}

/// A fake backend that:
/// - records every call together with the cwd at call time
/// - answers `output` with a scripted `CapturedOutput`
/// - can be told to fail launches with `NotFound`.
#[derive(Clone, Default)]
pub struct FakeBackend {
    calls: Arc<Mutex<Vec<BackendCall>>>,
    response: Arc<Mutex<CapturedOutput>>,
    fail_launch: bool,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responding(self, stdout: &str, stderr: &str, exit_code: i32) -> Self {
        *self.response.lock().unwrap() = CapturedOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code: Some(exit_code),
        };
        self
    }

    pub fn failing_launch(mut self) -> Self {
        self.fail_launch = true;
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, kind: CallKind, program: &str, args: &[String]) {
        let cwd = std::env::current_dir().unwrap_or_default();
        self.calls.lock().unwrap().push(BackendCall {
            kind,
            program: program.to_string(),
            args: args.to_vec(),
            cwd,
        });
    }

    fn launch_error(&self, program: &str) -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, format!("{program}: not found"))
    }
}

impl ProcessBackend for FakeBackend {
    fn output<'a>(
        &'a self,
        program: &'a str,
        args: &'a [String],
    ) -> Pin<Box<dyn Future<Output = io::Result<CapturedOutput>> + Send + 'a>> {
        self.record(CallKind::Output, program, args);
        let result = if self.fail_launch {
            Err(self.launch_error(program))
        } else {
            Ok(self.response.lock().unwrap().clone())
        };
        Box::pin(async move { result })
    }

    fn spawn_detached(&self, program: &str, args: &[String]) -> io::Result<DetachedTask> {
        self.record(CallKind::Detached, program, args);
        if self.fail_launch {
            return Err(self.launch_error(program));
        }
        Ok(DetachedTask {
            program: program.to_string(),
            pid: None,
        })
    }

    fn shell_open(&self, targets: &[String]) -> io::Result<()> {
        self.record(CallKind::ShellOpen, "start", targets);
        if self.fail_launch {
            return Err(self.launch_error("start"));
        }
        Ok(())
    }
}
