// src/app/layout.rs

use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_FOLDER: &str = "Src";
pub const DEFAULT_SOLUTION_NAME: &str = "neurons.sln";

/// Where things live inside the project checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub source_folder: PathBuf,
    pub solution_name: String,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Solution path relative to `root`. Not checked for existence.
    pub fn solution_path(&self) -> PathBuf {
        self.source_folder.join(&self.solution_name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_folder: PathBuf::from(DEFAULT_SOURCE_FOLDER),
            solution_name: DEFAULT_SOLUTION_NAME.to_string(),
        }
    }
}
