//! Environment context handed to templates
//!
//! Carries the working directory a template operates in, the logger its
//! messages go to, and the UI context used for terminal output.

mod logger;

pub use logger::{ConsoleLogger, Logger, MemoryLogger};

use crate::error::{CogeError, CogeResult};
use crate::ui::UiContext;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Context a template runs in
#[derive(Clone)]
pub struct Environment {
    cwd: PathBuf,
    logger: Arc<dyn Logger>,
    ui: UiContext,
}

impl Environment {
    /// Create an environment rooted at the process working directory
    pub fn create() -> CogeResult<Self> {
        let cwd =
            std::env::current_dir().map_err(|e| CogeError::io("getting current directory", e))?;
        Ok(Self::at(cwd))
    }

    /// Create an environment rooted at `cwd`, logging to the console
    pub fn at(cwd: impl Into<PathBuf>) -> Self {
        let ui = UiContext::detect();
        Self {
            cwd: cwd.into(),
            logger: Arc::new(ConsoleLogger::new(ui.clone())),
            ui,
        }
    }

    /// Replace the logger
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the UI context
    pub fn with_ui(mut self, ui: UiContext) -> Self {
        self.ui = ui;
        self
    }

    /// Working directory templates operate in
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("cwd", &self.cwd)
            .field("ui", &self.ui)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_uses_current_dir() {
        let env = Environment::create().unwrap();
        assert_eq!(env.cwd(), std::env::current_dir().unwrap());
    }

    #[test]
    fn with_logger_routes_messages() {
        let memory = MemoryLogger::new();
        let env = Environment::at("/tmp/project").with_logger(Arc::new(memory.clone()));

        env.logger().log("scaffolded");
        assert_eq!(memory.lines(), vec!["scaffolded".to_string()]);
        assert_eq!(env.cwd(), Path::new("/tmp/project"));
    }
}
