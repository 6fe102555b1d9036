// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::BuildConfiguration;

/// Command-line arguments for `launcher`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "launcher",
    version,
    about = "Open the project's solution, folder, terminal or Git GUI.",
    long_about = None
)]
pub struct CliArgs {
    /// Project checkout the actions operate on.
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub project_root: PathBuf,

    /// Settings file (TOML).
    ///
    /// Default: `LAUNCHER_SETTINGS`, else `Launcher.toml` in the current
    /// working directory.
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Selected build configuration (debug, profile, release).
    #[arg(long, value_name = "CONFIG", default_value = "debug", global = true)]
    pub build_config: BuildConfiguration,

    /// Command line used by the `terminal` action instead of the platform
    /// default.
    #[arg(long, value_name = "COMMAND", global = true)]
    pub terminal: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LAUNCHER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// What to do. Without a subcommand the interactive menu starts.
    #[command(subcommand)]
    pub command: Option<LauncherCommand>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum LauncherCommand {
    /// Open the solution file with its associated application.
    Solution,
    /// Open the project folder in the file browser.
    Folder,
    /// Open a command prompt in the project folder.
    Terminal,
    /// Launch `git gui` without waiting for it.
    GitGui,
    /// Does nothing.
    Placeholder,
    /// Run an arbitrary command and echo its output.
    Run {
        /// Directory to run in (default: the project root).
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,

        /// Start the command and return without waiting for it.
        #[arg(long)]
        detach: bool,

        /// Program followed by its arguments. A single argument is split on
        /// whitespace.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Show the interactive menu.
    Menu,
    /// Read or change the settings file.
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SettingsCommand {
    /// Write the placeholder `[main]` keys, keeping existing values.
    Init,
    /// Print one value.
    Get { section: String, key: String },
    /// Set one value.
    Set {
        section: String,
        key: String,
        value: String,
    },
    /// Remove one value.
    Remove { section: String, key: String },
    /// Print every section.
    List,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
