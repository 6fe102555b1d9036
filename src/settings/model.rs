// src/settings/model.rs

use std::collections::BTreeMap;

use serde::Serialize;

/// Name of the section the seed settings live in.
pub const MAIN_SECTION: &str = "main";

/// Launcher settings as stored on disk.
///
/// The file is plain TOML, one table per section and string values only:
///
/// ```toml
/// [main]
/// key1 = "value1"
/// key2 = "value2"
/// ```
///
/// No keys are interpreted by the launcher itself; the store only reads,
/// modifies and writes them back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Settings {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The placeholder contents written by `settings init`.
    pub fn seed() -> Self {
        let mut settings = Self::new();
        settings.set(MAIN_SECTION, "key1", "value1");
        settings.set(MAIN_SECTION, "key2", "value2");
        settings.set(MAIN_SECTION, "key3", "value3");
        settings
    }

    pub(crate) fn from_sections(sections: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { sections }
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Set a value, creating the section if needed. Returns the old value.
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Remove a value. A section left empty is removed too.
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        let entries = self.sections.get_mut(section)?;
        let old = entries.remove(key);
        if entries.is_empty() {
            self.sections.remove(section);
        }
        old
    }

    pub fn section(&self, section: &str) -> Option<&BTreeMap<String, String>> {
        self.sections.get(section)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, String>)> {
        self.sections.iter().map(|(name, entries)| (name.as_str(), entries))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Copy every value of `other` into `self`, overwriting on conflict.
    pub fn merge(&mut self, other: Settings) {
        for (section, entries) in other.sections {
            self.sections.entry(section).or_default().extend(entries);
        }
    }
}
