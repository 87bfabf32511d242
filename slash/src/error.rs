//! Error types for slash

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a slash invocation
///
/// Every variant is terminal: the binary prints the message on one line to
/// stderr and exits with status 1.
#[derive(Debug, Error)]
pub enum SlashError {
    #[error("{0}")]
    Usage(String),

    #[error("invalid prompt name {name:?}")]
    InvalidName { name: String },

    #[error("cannot create prompt with reserved name {name:?}")]
    ReservedName { name: String },

    #[error("prompt not found: {name}")]
    PromptNotFound { name: String },

    #[error("could not determine home directory")]
    HomeDir,

    #[error("creating directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template execution error: {0}")]
    TemplateExecution(String),

    #[error("running editor {editor:?}: {source}")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor {editor:?} exited with {status}")]
    EditorFailed { editor: String, status: String },

    #[error("writing output: {0}")]
    Output(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_prompt() {
        let err = SlashError::PromptNotFound {
            name: "greet".to_string(),
        };
        assert_eq!(err.to_string(), "prompt not found: greet");
    }

    #[test]
    fn test_reserved_name_message() {
        let err = SlashError::ReservedName {
            name: "help".to_string(),
        };
        assert_eq!(err.to_string(), "cannot create prompt with reserved name \"help\"");
    }

    #[test]
    fn test_create_dir_wraps_os_error() {
        let err = SlashError::CreateDir {
            path: PathBuf::from("/nope/slash"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/slash"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_template_errors_are_distinct() {
        let parse = SlashError::TemplateParse("unclosed block".to_string());
        let exec = SlashError::TemplateExecution("helper not defined".to_string());
        assert!(parse.to_string().starts_with("template parse error"));
        assert!(exec.to_string().starts_with("template execution error"));
    }
}
