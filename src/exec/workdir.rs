// src/exec/workdir.rs

//! Scoped changes of the process-wide working directory.
//!
//! The working directory belongs to the whole process, so every change goes
//! through [`WorkingDirGuard`]: it holds a process-wide lock for its whole
//! lifetime and puts the previous directory back when dropped, whether the
//! code inside the scope succeeded or not.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error};

use crate::errors::{LauncherError, Result};

static SCOPE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn scope_lock() -> &'static Mutex<()> {
    SCOPE_LOCK.get_or_init(|| Mutex::new(()))
}

/// RAII guard for a temporary working-directory change.
#[derive(Debug)]
pub struct WorkingDirGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl WorkingDirGuard {
    /// Record the current directory and change into `dir`.
    ///
    /// If `dir` cannot be entered the directory is left untouched and
    /// [`LauncherError::WorkingDirectory`] is returned.
    pub async fn enter(dir: &Path) -> Result<Self> {
        let lock = scope_lock().lock().await;
        let previous = env::current_dir()?;

        env::set_current_dir(dir).map_err(|source| LauncherError::WorkingDirectory {
            path: dir.to_path_buf(),
            source,
        })?;

        debug!(from = %previous.display(), to = %dir.display(), "entered working directory");

        Ok(Self {
            previous,
            _lock: lock,
        })
    }

    /// The directory that will be restored on drop.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            error!(
                dir = %self.previous.display(),
                error = %e,
                "failed to restore working directory"
            );
        } else {
            debug!(dir = %self.previous.display(), "restored working directory");
        }
    }
}
