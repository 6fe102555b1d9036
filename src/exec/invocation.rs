// src/exec/invocation.rs

//! The description of a single external command.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::{LauncherError, Result};

/// First token that hands the rest of the command to the platform opener.
pub const SHELL_OPEN_DIRECTIVE: &str = "start";

/// One external command: its tokens, where to run it, and whether to wait.
///
/// Built fresh for every call and thrown away afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    tokens: Vec<String>,
    working_dir: PathBuf,
    wait_for_exit: bool,
}

impl CommandInvocation {
    /// Build from explicit tokens. The first token is the program.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(LauncherError::EmptyCommand);
        }
        Ok(Self {
            tokens,
            working_dir: PathBuf::from("."),
            wait_for_exit: true,
        })
    }

    /// Build from a single command line, split on whitespace.
    ///
    /// No quoting rules apply: `"a b"` becomes two tokens.
    pub fn parse(command_line: &str) -> Result<Self> {
        Self::from_tokens(tokenize(command_line))
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn wait_for_exit(mut self, wait: bool) -> Self {
        self.wait_for_exit = wait;
        self
    }

    pub fn detached(self) -> Self {
        self.wait_for_exit(false)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn waits_for_exit(&self) -> bool {
        self.wait_for_exit
    }

    pub fn is_shell_open(&self) -> bool {
        self.program() == SHELL_OPEN_DIRECTIVE
    }
}

/// Renders the token list the way the log pane shows it: `["git", "gui"]`.
impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.tokens)
    }
}

/// Split a command line on whitespace, dropping empty pieces.
pub fn tokenize(command_line: &str) -> Vec<String> {
    command_line.split_whitespace().map(str::to_string).collect()
}
