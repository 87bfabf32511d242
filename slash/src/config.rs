//! Configuration for slash
//!
//! `~/.config/slash/config.json` is optional. A missing, unreadable or
//! malformed file behaves exactly like an empty one.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::env::Environment;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor program, takes priority over `$EDITOR`
    pub editor: Option<String>,

    /// Log level for stderr diagnostics (trace, debug, info, warn, error)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load the config for this environment, falling back to defaults
    pub fn load(env: &Environment) -> Self {
        Self::load_from_file(env.config_file())
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        debug!(?path, "Config::load_from_file: called");

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(error = %e, "Config::load_from_file: no readable config, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str::<Config>(&content) {
            Ok(config) => {
                info!("Loaded config from: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read only the log level, without logging anything
    ///
    /// Runs before the subscriber exists; the full [`Config::load`] comes
    /// after logging is set up.
    pub fn load_log_level(env: &Environment) -> Option<String> {
        let content = fs::read_to_string(env.config_file()).ok()?;
        serde_json::from_str::<Config>(&content).ok()?.log_level
    }

    /// Configured editor, ignoring empty strings
    pub fn editor(&self) -> Option<&str> {
        self.editor.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }
}
