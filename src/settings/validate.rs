// src/settings/validate.rs

use std::collections::BTreeMap;

use crate::errors::{LauncherError, Result};
use crate::settings::model::Settings;

impl TryFrom<toml::Table> for Settings {
    type Error = LauncherError;

    fn try_from(raw: toml::Table) -> std::result::Result<Self, Self::Error> {
        let mut sections = BTreeMap::new();
        for (name, value) in raw {
            let entries = validate_section(&name, value)?;
            sections.insert(name, entries);
        }
        Ok(Settings::from_sections(sections))
    }
}

fn validate_section(name: &str, value: toml::Value) -> Result<BTreeMap<String, String>> {
    let table = match value {
        toml::Value::Table(table) => table,
        other => {
            return Err(LauncherError::Config(format!(
                "top-level key '{name}' must be a [section], got a {}",
                other.type_str()
            )));
        }
    };

    let mut entries = BTreeMap::new();
    for (key, value) in table {
        match value {
            toml::Value::String(s) => {
                entries.insert(key, s);
            }
            other => {
                return Err(LauncherError::Config(format!(
                    "[{name}].{key} must be a string, got a {}",
                    other.type_str()
                )));
            }
        }
    }
    Ok(entries)
}
