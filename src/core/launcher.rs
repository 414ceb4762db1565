//! External editor integration, a side-effecting boundary.
//!
//! Opening a file hands its absolute path to an [`EditorLauncher`]. The
//! shipped [`CommandLauncher`] spawns the configured program and does not
//! wait: the external process's lifetime is independent of the session.
//! [`NoopLauncher`] is the valid "no integration configured" state.

use crate::core::config::NavigatorConfig;
use crate::core::error::{NavigatorError, Result};
use std::path::Path;
use std::process::Command;

/// Boundary for opening a file in an external editor
pub trait EditorLauncher {
    /// Launch the integration for the file at `path`, fire-and-forget
    fn launch(&self, path: &Path) -> Result<()>;
}

/// Spawns a configured program with the file path as its single argument
pub struct CommandLauncher {
    program: String,
}

impl CommandLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl EditorLauncher for CommandLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        log::debug!("Launching {} for {}", self.program, path.display());
        // Dropping the Child detaches it; the session never waits on it
        Command::new(&self.program)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|e| NavigatorError::launch_failed(&self.program, e.to_string()))
    }
}

/// Valid configuration with no external editor; launching logs and succeeds
pub struct NoopLauncher;

impl EditorLauncher for NoopLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        log::warn!(
            "No editor integration configured, not opening {}",
            path.display()
        );
        Ok(())
    }
}

/// Pick the launcher from config, then `EDITOR`/`VISUAL`, else the no-op
pub fn launcher_from_config(config: &NavigatorConfig) -> Box<dyn EditorLauncher> {
    match config.editor_program() {
        Some(program) => Box::new(CommandLauncher::new(program)),
        None => Box::new(NoopLauncher),
    }
}
