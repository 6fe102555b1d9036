// src/app/menu.rs

//! Interactive, line-driven front end.
//!
//! Prints the tabs with numbered buttons and then reads one request per
//! line until `quit` or end of input. Each request runs to completion before
//! the next line is read, so a long captured command holds the menu.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::app::actions::Action;
use crate::app::context::LauncherContext;
use crate::app::tabs::{numbered_actions, tabs, window_title};
use crate::errors::Result;
use crate::types::BuildConfiguration;

/// One parsed line of menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRequest {
    Run(Action),
    SelectBuild(BuildConfiguration),
    Help,
    Quit,
    Empty,
}

/// Parse a menu line: an action number, an action name, `build <config>`,
/// `help` or `quit`.
pub fn parse_request(line: &str) -> std::result::Result<MenuRequest, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(MenuRequest::Empty);
    }

    let lowered = line.to_lowercase();
    match lowered.as_str() {
        "q" | "quit" | "exit" => return Ok(MenuRequest::Quit),
        "h" | "help" | "?" => return Ok(MenuRequest::Help),
        _ => {}
    }

    let mut words = lowered.split_whitespace();
    if words.next() == Some("build") {
        return match (words.next(), words.next()) {
            (Some(config), None) => config
                .parse::<BuildConfiguration>()
                .map(MenuRequest::SelectBuild),
            _ => Err("usage: build <debug|profile|release>".to_string()),
        };
    }

    if let Ok(n) = line.parse::<usize>() {
        return numbered_actions()
            .into_iter()
            .find(|(i, _)| *i == n)
            .map(|(_, action)| MenuRequest::Run(action))
            .ok_or_else(|| format!("no action numbered {n}"));
    }

    line.parse::<Action>().map(MenuRequest::Run)
}

/// Render the menu text, one entry per line.
pub fn render_menu(ctx: &LauncherContext) -> Vec<String> {
    let numbers = numbered_actions();
    let number_of = |action: Action| {
        numbers
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(i, _)| *i)
            .unwrap_or_default()
    };

    let mut lines = vec![window_title()];
    for tab in tabs() {
        lines.push(format!("[{}]", tab.name));
        for group in &tab.groups {
            if let Some(title) = group.title {
                lines.push(format!("  {title}"));
            }
            for action in &group.actions {
                lines.push(format!(
                    "    {}) {:<16} ({})",
                    number_of(*action),
                    action.label(),
                    action.key()
                ));
            }
            if let Some(note) = group.note {
                lines.push(format!("    {note}"));
            }
        }
    }
    let builds: Vec<&str> = BuildConfiguration::ALL.iter().map(|c| c.as_str()).collect();
    lines.push(format!(
        "build configuration: {} (change with `build <{}>`)",
        ctx.build_configuration(),
        builds.join("|")
    ));
    lines.push("type a number or name, `help` or `quit`".to_string());
    lines
}

/// Drive the menu from `input` until `quit` or end of input.
pub async fn run_menu<R>(ctx: &mut LauncherContext, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let sink = ctx.sink().clone();
    for line in render_menu(ctx) {
        sink.print_out(&line);
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_request(&line) {
            Ok(MenuRequest::Quit) => break,
            Ok(MenuRequest::Empty) => {}
            Ok(MenuRequest::Help) => {
                for line in render_menu(ctx) {
                    sink.print_out(&line);
                }
            }
            Ok(MenuRequest::SelectBuild(config)) => {
                ctx.set_build_configuration(config);
                sink.print_out(&format!("build configuration: {config}"));
            }
            Ok(MenuRequest::Run(action)) => {
                if let Err(e) = ctx.invoke(action).await {
                    warn!(action = action.key(), error = %e, "action failed");
                    sink.print_out(&format!("error: {e}"));
                }
            }
            Err(msg) => sink.print_out(&msg),
        }
    }

    info!("menu closed");
    Ok(())
}
