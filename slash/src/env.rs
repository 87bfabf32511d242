//! Process environment inputs
//!
//! Home directory, working directory and `$EDITOR` are read once in `main`
//! and handed to the rest of the crate as plain values.

use std::path::PathBuf;

use crate::error::SlashError;

/// Explicit inputs taken from the running process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// User home directory
    pub home: PathBuf,
    /// Directory slash was invoked from
    pub cwd: PathBuf,
    /// Value of `$EDITOR`, if set
    pub editor_var: Option<String>,
}

impl Environment {
    /// Build an environment from explicit values
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>, editor_var: Option<String>) -> Self {
        Self {
            home: home.into(),
            cwd: cwd.into(),
            editor_var,
        }
    }

    /// Read the environment of the current process
    pub fn detect() -> Result<Self, SlashError> {
        let home = dirs::home_dir().ok_or(SlashError::HomeDir)?;
        // A vanished cwd only breaks the project-local lookup, which then misses
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let editor_var = std::env::var("EDITOR").ok();
        Ok(Self::new(home, cwd, editor_var))
    }

    /// `~/.config/slash`
    pub fn config_dir(&self) -> PathBuf {
        self.home.join(crate::CONFIG_SUBDIR)
    }

    /// `~/.config/slash/config.json`
    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("config.json")
    }

    /// `./.slash` resolved against the invocation directory
    pub fn local_dir(&self) -> PathBuf {
        self.cwd.join(crate::LOCAL_DIR)
    }
}
