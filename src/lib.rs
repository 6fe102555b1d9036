// src/lib.rs

pub mod app;
pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod output;
pub mod settings;
pub mod types;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::{debug, info};

use crate::app::{Action, LauncherContext, ProjectLayout};
use crate::cli::{CliArgs, LauncherCommand, SettingsCommand};
use crate::exec::{CommandInvocation, CommandRunner};
use crate::output::{ConsoleSink, OutputSink};
use crate::settings::{default_settings_path, Settings};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the output sink (stdout transcript)
/// - the command runner on real processes
/// - the launcher context from CLI flags
/// - subcommand dispatch (actions, raw `run`, menu, settings)
pub async fn run(args: CliArgs) -> Result<()> {
    let sink: Arc<dyn OutputSink> = Arc::new(ConsoleSink);
    let runner = CommandRunner::with_sink(sink);

    let ctx = LauncherContext::new(runner, ProjectLayout::new(&args.project_root))
        .with_build_configuration(args.build_config)
        .with_terminal(args.terminal.as_deref());

    let settings_path = args.settings.clone().unwrap_or_else(default_settings_path);

    dispatch(ctx, args.command, settings_path).await
}

async fn dispatch(
    mut ctx: LauncherContext,
    command: Option<LauncherCommand>,
    settings_path: PathBuf,
) -> Result<()> {
    let command = command.unwrap_or(LauncherCommand::Menu);
    debug!(?command, "dispatching");

    match command {
        LauncherCommand::Solution => invoke(&ctx, Action::OpenSolution).await,
        LauncherCommand::Folder => invoke(&ctx, Action::OpenFolder).await,
        LauncherCommand::Terminal => invoke(&ctx, Action::CommandPrompt).await,
        LauncherCommand::GitGui => invoke(&ctx, Action::GitGui).await,
        LauncherCommand::Placeholder => invoke(&ctx, Action::Placeholder).await,
        LauncherCommand::Run {
            cwd,
            detach,
            command,
        } => {
            let invocation = invocation_from_args(&command)?
                .in_dir(cwd.unwrap_or_else(|| ctx.layout().root().to_path_buf()))
                .wait_for_exit(!detach);
            ctx.runner().run(&invocation).await?;
            Ok(())
        }
        LauncherCommand::Menu => {
            let stdin = BufReader::new(tokio::io::stdin());
            app::run_menu(&mut ctx, stdin).await?;
            Ok(())
        }
        LauncherCommand::Settings { action } => {
            run_settings_command(ctx.sink().as_ref(), &settings_path, action)
        }
    }
}

async fn invoke(ctx: &LauncherContext, action: Action) -> Result<()> {
    let outcome = ctx.invoke(action).await?;
    info!(action = action.key(), ?outcome, "action done");
    Ok(())
}

/// A single argument is treated as a whole command line and split on
/// whitespace; several arguments are used as tokens verbatim.
fn invocation_from_args(tokens: &[String]) -> crate::errors::Result<CommandInvocation> {
    match tokens {
        [single] => CommandInvocation::parse(single),
        many => CommandInvocation::from_tokens(many.iter().cloned()),
    }
}

/// Execute one `settings` subcommand against the file at `path`.
pub fn run_settings_command(
    sink: &dyn OutputSink,
    path: &std::path::Path,
    command: SettingsCommand,
) -> Result<()> {
    match command {
        SettingsCommand::Init => {
            let settings = settings::update(path, |settings| {
                let mut seeded = Settings::seed();
                seeded.merge(settings.clone());
                *settings = seeded;
            })?;
            info!(path = %path.display(), sections = settings.sections().count(), "settings initialised");
        }
        SettingsCommand::Get { section, key } => {
            let settings = Settings::load(path)?;
            match settings.get(&section, &key) {
                Some(value) => sink.print_out(value),
                None => anyhow::bail!("no value for [{section}].{key} in {}", path.display()),
            }
        }
        SettingsCommand::Set {
            section,
            key,
            value,
        } => {
            settings::update(path, |settings| {
                settings.set(section, key, value);
            })?;
        }
        SettingsCommand::Remove { section, key } => {
            let mut settings = Settings::load(path)?;
            if settings.remove(&section, &key).is_none() {
                anyhow::bail!("no value for [{section}].{key} in {}", path.display());
            }
            settings.save(path)?;
        }
        SettingsCommand::List => {
            let settings = Settings::load(path)?;
            for (section, entries) in settings.sections() {
                sink.print_out(&format!("[{section}]"));
                for (key, value) in entries {
                    sink.print_out(&format!("{key} = {value}"));
                }
            }
        }
    }
    Ok(())
}
