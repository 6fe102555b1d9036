// src/app/tabs.rs

//! Static catalogue of tabs, groups and their buttons.

use crate::app::actions::Action;

pub const WINDOW_TITLE: &str = "Neurons Launcher";
pub const VERSION_NUMBER: &str = "0.01";

/// `"Neurons Launcher v0.01"`.
pub fn window_title() -> String {
    format!("{WINDOW_TITLE} v{VERSION_NUMBER}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub title: Option<&'static str>,
    pub actions: Vec<Action>,
    /// Free-standing caption shown next to the buttons.
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub name: &'static str,
    pub groups: Vec<Group>,
}

impl Tab {
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.groups.iter().flat_map(|g| g.actions.iter().copied())
    }
}

/// The tabs in display order: `Local`, then `Tools`.
pub fn tabs() -> Vec<Tab> {
    vec![
        Tab {
            name: "Local",
            groups: vec![
                Group {
                    title: Some("Solution"),
                    actions: vec![
                        Action::OpenSolution,
                        Action::OpenFolder,
                        Action::CommandPrompt,
                    ],
                    note: None,
                },
                Group {
                    title: Some("Git"),
                    actions: vec![Action::GitGui],
                    note: None,
                },
            ],
        },
        Tab {
            name: "Tools",
            groups: vec![Group {
                title: None,
                actions: vec![Action::Placeholder],
                note: Some("???"),
            }],
        },
    ]
}

/// Every action in menu order, numbered from 1.
pub fn numbered_actions() -> Vec<(usize, Action)> {
    tabs()
        .iter()
        .flat_map(|tab| tab.actions().collect::<Vec<_>>())
        .enumerate()
        .map(|(i, action)| (i + 1, action))
        .collect()
}
