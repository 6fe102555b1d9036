// src/app/actions.rs

use std::fmt;
use std::str::FromStr;

/// Everything a launcher button can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    OpenSolution,
    OpenFolder,
    CommandPrompt,
    GitGui,
    Placeholder,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::OpenSolution,
        Action::OpenFolder,
        Action::CommandPrompt,
        Action::GitGui,
        Action::Placeholder,
    ];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Action::OpenSolution => "Open Solution",
            Action::OpenFolder => "Open Folder",
            Action::CommandPrompt => "Command Prompt",
            Action::GitGui => "Open Git Gui",
            Action::Placeholder => "Placeholder",
        }
    }

    /// Short name accepted on the command line and in the menu.
    pub fn key(&self) -> &'static str {
        match self {
            Action::OpenSolution => "solution",
            Action::OpenFolder => "folder",
            Action::CommandPrompt => "terminal",
            Action::GitGui => "git-gui",
            Action::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "solution" | "open-solution" => Ok(Action::OpenSolution),
            "folder" | "open-folder" => Ok(Action::OpenFolder),
            "terminal" | "command-prompt" | "cmd" => Ok(Action::CommandPrompt),
            "git-gui" | "open-git-gui" | "git" => Ok(Action::GitGui),
            "placeholder" => Ok(Action::Placeholder),
            other => Err(format!("unknown action: {other}")),
        }
    }
}
