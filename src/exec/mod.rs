// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invocation`] describes one command: tokens, directory, wait flag.
//! - [`workdir`] scopes changes of the process-wide working directory.
//! - [`backend`] provides the `ProcessBackend` trait and the tokio-based
//!   implementation used in production; tests swap in a fake.
//! - [`outcome`] holds captured output and detached-task handles.
//! - [`runner`] ties the above together into the `CommandRunner`.

pub mod backend;
pub mod invocation;
pub mod outcome;
pub mod runner;
pub mod workdir;

pub use backend::{ProcessBackend, TokioProcessBackend};
pub use invocation::{tokenize, CommandInvocation, SHELL_OPEN_DIRECTIVE};
pub use outcome::{CapturedOutput, DetachedTask, RunOutcome};
pub use runner::CommandRunner;
pub use workdir::WorkingDirGuard;
