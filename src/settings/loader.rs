// src/settings/loader.rs

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;
use crate::settings::model::Settings;

/// Environment variable that overrides the default settings path.
pub const SETTINGS_ENV_VAR: &str = "LAUNCHER_SETTINGS";

const DEFAULT_SETTINGS_FILE: &str = "Launcher.toml";

/// Load settings from `path`.
///
/// A missing file is not an error and yields empty settings, so the first
/// `update` creates it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "settings file not found; using empty settings");
            return Ok(Settings::new());
        }
        Err(e) => return Err(e.into()),
    };

    let raw: toml::Table = toml::from_str(&contents)?;
    Settings::try_from(raw)
}

/// Write settings to `path`, creating parent directories as needed.
pub fn save_to_path(settings: &Settings, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = toml::to_string(settings)?;
    fs::write(path, contents)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Read-modify-write: load, apply `f`, save, and return the new settings.
pub fn update<F>(path: impl AsRef<Path>, f: F) -> Result<Settings>
where
    F: FnOnce(&mut Settings),
{
    let path = path.as_ref();
    let mut settings = load_from_path(path)?;
    f(&mut settings);
    save_to_path(&settings, path)?;
    Ok(settings)
}

/// Settings path used when none is given on the command line.
///
/// `LAUNCHER_SETTINGS` if set and non-empty, else `Launcher.toml` in the
/// current directory.
pub fn default_settings_path() -> PathBuf {
    std::env::var(SETTINGS_ENV_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_from_path(path)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_to_path(self, path)
    }
}
