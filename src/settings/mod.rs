// src/settings/mod.rs

//! Persisted launcher settings.
//!
//! Responsibilities:
//! - Define the section/key/value data model (`model.rs`).
//! - Read and write the settings file (`loader.rs`).
//! - Validate the raw TOML shape (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_settings_path, load_from_path, save_to_path, update, SETTINGS_ENV_VAR};
pub use model::{Settings, MAIN_SECTION};
