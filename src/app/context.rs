// src/app/context.rs

use std::sync::Arc;

use tracing::debug;

use crate::app::actions::Action;
use crate::app::layout::ProjectLayout;
use crate::errors::Result;
use crate::exec::{CommandInvocation, CommandRunner, RunOutcome, SHELL_OPEN_DIRECTIVE};
use crate::output::OutputSink;
use crate::types::BuildConfiguration;

/// State shared by every launcher action.
///
/// Holds what used to be window-level globals (the log pane and the build
/// configuration selection) so actions can run without any UI attached.
#[derive(Clone)]
pub struct LauncherContext {
    runner: CommandRunner,
    layout: ProjectLayout,
    build_configuration: BuildConfiguration,
    terminal: Option<Vec<String>>,
}

impl LauncherContext {
    pub fn new(runner: CommandRunner, layout: ProjectLayout) -> Self {
        Self {
            runner,
            layout,
            build_configuration: BuildConfiguration::default(),
            terminal: None,
        }
    }

    pub fn with_build_configuration(mut self, config: BuildConfiguration) -> Self {
        self.build_configuration = config;
        self
    }

    /// Override the program started by [`Action::CommandPrompt`].
    pub fn with_terminal(mut self, command_line: Option<&str>) -> Self {
        self.terminal = command_line
            .map(crate::exec::tokenize)
            .filter(|tokens| !tokens.is_empty());
        self
    }

    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    pub fn sink(&self) -> &Arc<dyn OutputSink> {
        self.runner.sink()
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn build_configuration(&self) -> BuildConfiguration {
        self.build_configuration
    }

    pub fn set_build_configuration(&mut self, config: BuildConfiguration) {
        self.build_configuration = config;
    }

    /// The command an action would run, or `None` for inert actions.
    pub fn invocation_for(&self, action: Action) -> Result<Option<CommandInvocation>> {
        let invocation = match action {
            Action::OpenSolution => {
                let solution = self.layout.solution_path();
                CommandInvocation::from_tokens([
                    SHELL_OPEN_DIRECTIVE.to_string(),
                    solution.to_string_lossy().into_owned(),
                ])?
            }
            Action::OpenFolder => CommandInvocation::from_tokens([SHELL_OPEN_DIRECTIVE, "."])?,
            Action::CommandPrompt => self.terminal_invocation()?,
            Action::GitGui => CommandInvocation::from_tokens(["git", "gui"])?.detached(),
            Action::Placeholder => return Ok(None),
        };
        Ok(Some(invocation.in_dir(self.layout.root())))
    }

    /// Run an action. Returns `None` for inert actions.
    pub async fn invoke(&self, action: Action) -> Result<Option<RunOutcome>> {
        debug!(action = action.key(), build_configuration = %self.build_configuration, "invoking action");
        match self.invocation_for(action)? {
            Some(invocation) => Ok(Some(self.runner.execute(&invocation).await?)),
            None => Ok(None),
        }
    }

    fn terminal_invocation(&self) -> Result<CommandInvocation> {
        if let Some(tokens) = &self.terminal {
            return Ok(CommandInvocation::from_tokens(tokens.clone())?.detached());
        }

        if cfg!(windows) {
            CommandInvocation::from_tokens([SHELL_OPEN_DIRECTIVE, "cmd", "."])
        } else if cfg!(target_os = "macos") {
            CommandInvocation::from_tokens([SHELL_OPEN_DIRECTIVE, "-a", "Terminal", "."])
        } else {
            Ok(CommandInvocation::from_tokens(["x-terminal-emulator"])?.detached())
        }
    }
}
