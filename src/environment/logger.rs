//! Loggers for template-facing messages
//!
//! Diagnostics go through `tracing`; messages meant for the person running
//! a template (install summaries, skip notices, remediation) go through a
//! [`Logger`] so embedders and tests can capture them.

use crate::ui::{self, UiContext};
use std::sync::{Arc, Mutex};

/// Sink for user-facing template messages
pub trait Logger: Send + Sync {
    /// Write one message
    fn log(&self, message: &str);
}

/// Writes messages to the terminal through the `ui` module
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    ctx: UiContext,
}

impl ConsoleLogger {
    pub fn new(ctx: UiContext) -> Self {
        Self { ctx }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(UiContext::detect())
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        tracing::debug!(target: "coge::template", "{}", console::strip_ansi_codes(message));
        ui::message(&self.ctx, message);
    }
}

/// Records messages in memory, with ANSI styling stripped
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message logged so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Whether any logged message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(console::strip_ansi_codes(message).into_owned());
        }
    }
}
