#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use launcher::app::{LauncherContext, ProjectLayout};
use launcher::exec::CommandRunner;
use launcher::output::MemorySink;
use launcher::types::BuildConfiguration;

use crate::fake_backend::FakeBackend;

/// Everything a test needs to drive a `LauncherContext` without real
/// processes.
pub struct TestLauncher {
    pub ctx: LauncherContext,
    pub backend: FakeBackend,
    pub sink: MemorySink,
}

/// Builder for `TestLauncher`.
pub struct TestLauncherBuilder {
    backend: FakeBackend,
    root: PathBuf,
    build: BuildConfiguration,
    terminal: Option<String>,
}

impl TestLauncherBuilder {
    pub fn new() -> Self {
        Self {
            backend: FakeBackend::new(),
            root: PathBuf::from("."),
            build: BuildConfiguration::default(),
            terminal: None,
        }
    }

    pub fn backend(mut self, backend: FakeBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn build_configuration(mut self, build: BuildConfiguration) -> Self {
        self.build = build;
        self
    }

    pub fn terminal(mut self, command_line: &str) -> Self {
        self.terminal = Some(command_line.to_string());
        self
    }

    pub fn build(self) -> TestLauncher {
        let sink = MemorySink::new();
        let runner = CommandRunner::new(Arc::new(self.backend.clone()), Arc::new(sink.clone()));
        let ctx = LauncherContext::new(runner, ProjectLayout::new(self.root))
            .with_build_configuration(self.build)
            .with_terminal(self.terminal.as_deref());
        TestLauncher {
            ctx,
            backend: self.backend,
            sink,
        }
    }
}

impl Default for TestLauncherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
