//! Prompt store
//!
//! Resolves prompt names to file content by checking candidate locations in
//! a fixed order:
//! 1. `~/.config/slash/{name}.md` (user prompts, read-write)
//! 2. `./.slash/{name}.md` (project prompts, lookup only)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::env::Environment;
use crate::error::SlashError;

/// Check that a prompt name is usable as a single file stem
pub fn validate_name(name: &str) -> Result<(), SlashError> {
    debug!(%name, "validate_name: called");
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.starts_with('-')
        || name.contains('/')
        || name.contains('\\');
    if invalid {
        debug!(%name, "validate_name: rejected");
        return Err(SlashError::InvalidName { name: name.to_string() });
    }
    Ok(())
}

/// Prompt files across the ordered candidate locations
#[derive(Debug, Clone)]
pub struct PromptStore {
    /// Search order; the first entry is the writable location
    locations: Vec<PathBuf>,
}

impl PromptStore {
    /// Store rooted at the standard locations for this environment
    pub fn new(env: &Environment) -> Self {
        let locations = vec![env.config_dir(), env.local_dir()];
        debug!(?locations, "PromptStore::new: called");
        Self { locations }
    }

    fn file_name(name: &str) -> String {
        format!("{}.{}", name, crate::PROMPT_EXT)
    }

    /// Path of a prompt in the writable location
    pub fn primary_path(&self, name: &str) -> PathBuf {
        let dir = self.locations.first().map(PathBuf::as_path).unwrap_or(Path::new("."));
        dir.join(Self::file_name(name))
    }

    /// Read a prompt's bytes from the first location that has it
    pub fn resolve(&self, name: &str) -> Result<Vec<u8>, SlashError> {
        debug!(%name, "PromptStore::resolve: called");
        validate_name(name)?;

        for dir in &self.locations {
            let path = dir.join(Self::file_name(name));
            match fs::read(&path) {
                Ok(content) => {
                    debug!(?path, bytes = content.len(), "PromptStore::resolve: found");
                    return Ok(content);
                }
                Err(e) => {
                    debug!(?path, error = %e, "PromptStore::resolve: not readable, trying next");
                }
            }
        }

        debug!(%name, "PromptStore::resolve: not found anywhere");
        Err(SlashError::PromptNotFound { name: name.to_string() })
    }

    /// Replace a prompt's content in the writable location
    pub fn write(&self, name: &str, content: &[u8]) -> Result<PathBuf, SlashError> {
        debug!(%name, bytes = content.len(), "PromptStore::write: called");
        validate_name(name)?;
        let path = self.primary_path(name);
        ensure_parent(&path)?;
        fs::write(&path, content).map_err(|source| SlashError::WriteFile {
            path: path.clone(),
            source,
        })?;
        info!("Wrote prompt {} to {}", name, path.display());
        Ok(path)
    }

    /// Make sure a prompt file exists in the writable location without
    /// touching existing content
    pub fn touch(&self, name: &str) -> Result<PathBuf, SlashError> {
        debug!(%name, "PromptStore::touch: called");
        validate_name(name)?;
        let path = self.primary_path(name);
        ensure_parent(&path)?;
        match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => info!("Created empty prompt {}", path.display()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(?path, "PromptStore::touch: already exists");
            }
            Err(source) => return Err(SlashError::WriteFile { path, source }),
        }
        Ok(path)
    }
}

fn ensure_parent(path: &Path) -> Result<(), SlashError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SlashError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
