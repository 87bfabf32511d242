//! Editor launcher
//!
//! `slash edit <name>` either replaces a prompt directly (`-p <text...>`) or
//! opens it in the user's editor as a foreground child process.

use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::env::Environment;
use crate::error::SlashError;
use crate::store::PromptStore;

/// Editor used when neither the config nor `$EDITOR` names one
pub const DEFAULT_EDITOR: &str = "vi";

/// Flag selecting direct-write mode
pub const REPLACE_FLAG: &str = "-p";

/// How the editor child finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorExit {
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
}

impl EditorExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl std::fmt::Display for EditorExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "no exit status (terminated by signal)"),
        }
    }
}

/// Runs an editor program in the foreground
///
/// Implementations block until the program exits.
pub trait Launcher {
    fn launch(&mut self, program: &str, args: &[String]) -> io::Result<EditorExit>;
}

/// Spawns real processes that share this terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, program: &str, args: &[String]) -> io::Result<EditorExit> {
        debug!(%program, ?args, "SystemLauncher::launch: called");
        // status() waits on the child, including when it fails to start
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        debug!(?status, "SystemLauncher::launch: child exited");
        Ok(EditorExit { code: status.code() })
    }
}

/// Pick the editor: config, then `$EDITOR`, then `vi`
pub fn resolve_editor(config: &Config, env: &Environment) -> String {
    debug!(config_editor = ?config.editor, editor_var = ?env.editor_var, "resolve_editor: called");
    if let Some(editor) = config.editor() {
        debug!(%editor, "resolve_editor: using config");
        return editor.to_string();
    }
    if let Some(editor) = env.editor_var.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        debug!(%editor, "resolve_editor: using $EDITOR");
        return editor.to_string();
    }
    debug!("resolve_editor: using default");
    DEFAULT_EDITOR.to_string()
}

/// Split an editor command line into program and leading arguments
pub fn split_command(editor: &str) -> (String, Vec<String>) {
    let mut parts = editor.split_whitespace().map(str::to_string);
    let program = parts.next().unwrap_or_else(|| DEFAULT_EDITOR.to_string());
    (program, parts.collect())
}

/// Text for direct-write mode, if `extra` asks for it
pub fn replacement_text(extra: &[String]) -> Option<String> {
    match extra {
        [flag, rest @ ..] if flag == REPLACE_FLAG && !rest.is_empty() => Some(rest.join(" ")),
        _ => None,
    }
}

/// Create or edit a prompt
///
/// With `-p <text...>` the joined text replaces the prompt and no editor
/// runs. Otherwise the prompt file is created if needed and opened in the
/// resolved editor.
pub fn edit_prompt<L, W>(
    name: &str,
    extra: &[String],
    store: &PromptStore,
    config: &Config,
    env: &Environment,
    launcher: &mut L,
    out: &mut W,
) -> Result<(), SlashError>
where
    L: Launcher + ?Sized,
    W: Write + ?Sized,
{
    debug!(%name, ?extra, "edit_prompt: called");

    if let Some(content) = replacement_text(extra) {
        debug!("edit_prompt: direct-write mode");
        store.write(name, content.as_bytes())?;
        writeln!(out, "Prompt replaced.").map_err(SlashError::Output)?;
        return Ok(());
    }

    if !extra.is_empty() {
        warn!("Ignoring extra arguments to edit: {}", extra.join(" "));
    }

    let path = store.touch(name)?;
    let editor = resolve_editor(config, env);
    run_editor(&editor, &path, launcher)
}

/// Launch `editor` on `path` and wait for it
pub fn run_editor<L>(editor: &str, path: &Path, launcher: &mut L) -> Result<(), SlashError>
where
    L: Launcher + ?Sized,
{
    debug!(%editor, ?path, "run_editor: called");
    let (program, mut args) = split_command(editor);
    args.push(path.to_string_lossy().into_owned());

    info!("Opening {} with {}", path.display(), editor);
    let exit = launcher.launch(&program, &args).map_err(|source| SlashError::EditorLaunch {
        editor: editor.to_string(),
        source,
    })?;

    if !exit.success() {
        debug!(%exit, "run_editor: editor failed");
        return Err(SlashError::EditorFailed {
            editor: editor.to_string(),
            status: exit.to_string(),
        });
    }
    Ok(())
}
