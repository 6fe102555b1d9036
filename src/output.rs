// src/output.rs

//! The launcher's log pane.
//!
//! Every command the launcher runs is echoed here, followed by whatever it
//! printed. Diagnostics go through `tracing` (stderr); this sink is for the
//! user-facing transcript only.

use std::io::Write;
use std::sync::{Arc, Mutex};

use chrono::Local;

/// Timestamp format used for log pane entries, e.g. `20261019_14:03:59`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H:%M:%S";

/// Destination for log pane lines.
pub trait OutputSink: Send + Sync {
    fn print_out(&self, text: &str);
}

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Writes the transcript to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn print_out(&self, text: &str) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        // A closed stdout is not worth failing a command over.
        let _ = writeln!(lock, "{text}");
        let _ = lock.flush();
    }
}

/// Keeps the transcript in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `print_out` call so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// The whole transcript as the pane would show it.
    pub fn contents(&self) -> String {
        self.lines()
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }
}

impl OutputSink for MemorySink {
    fn print_out(&self, text: &str) {
        if let Ok(mut guard) = self.lines.lock() {
            guard.push(text.to_string());
        }
    }
}
