//! Application state management
use parking_lot::RwLock;

use vela_core::{Config, Result, Shell, ShellError};

/// Thread-safe application state wrapper
pub struct AppState {
    shell: RwLock<Option<Shell>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let shell = Shell::new(config)?;

        Ok(Self {
            shell: RwLock::new(Some(shell)),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        if let Some(shell) = self.shell.read().as_ref() {
            shell.initialize();
        }
        Ok(())
    }

    pub fn with_shell<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Shell) -> Result<T>,
    {
        let guard = self.shell.read();
        match guard.as_ref() {
            Some(shell) => f(shell),
            None => Err(ShellError::NotInitialized),
        }
    }
}
