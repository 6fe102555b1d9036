// src/app/mod.rs

//! Launcher actions and the context they run in.
//!
//! - [`actions`]: the buttons.
//! - [`tabs`]: how buttons are grouped for display.
//! - [`layout`]: project paths the actions refer to.
//! - [`context`]: `LauncherContext`, the explicit state every action gets.
//! - [`menu`]: interactive line-driven front end.

pub mod actions;
pub mod context;
pub mod layout;
pub mod menu;
pub mod tabs;

pub use actions::Action;
pub use context::LauncherContext;
pub use layout::ProjectLayout;
pub use menu::{parse_request, render_menu, run_menu, MenuRequest};
pub use tabs::{numbered_actions, tabs, window_title, Tab};
