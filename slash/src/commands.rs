//! Command handlers
//!
//! Runs a classified [`Action`] against the prompt store, template renderer
//! and editor launcher.

use std::io::Write;

use tracing::{debug, info};

use crate::cli::{self, Action};
use crate::config::Config;
use crate::editor::{self, Launcher};
use crate::env::Environment;
use crate::error::SlashError;
use crate::store::PromptStore;
use crate::template;

/// Execute one action, writing user-facing output to `out`
pub fn run<L, W>(
    action: Action,
    env: &Environment,
    config: &Config,
    launcher: &mut L,
    out: &mut W,
) -> Result<(), SlashError>
where
    L: Launcher + ?Sized,
    W: Write + ?Sized,
{
    debug!(?action, "run: called");
    match action {
        Action::Help => print_help(out),
        Action::Version => print_version(out),
        Action::Edit { name, extra } => {
            cli::check_reserved(&name)?;
            let store = PromptStore::new(env);
            editor::edit_prompt(&name, &extra, &store, config, env, launcher, out)
        }
        Action::Show { name, args } => {
            let store = PromptStore::new(env);
            show_prompt(&store, &name, &args, out)
        }
    }
}

pub fn print_help<W: Write + ?Sized>(out: &mut W) -> Result<(), SlashError> {
    writeln!(out, "{}", cli::HELP).map_err(SlashError::Output)
}

pub fn print_version<W: Write + ?Sized>(out: &mut W) -> Result<(), SlashError> {
    writeln!(out, "{}", crate::VERSION).map_err(SlashError::Output)
}

/// Print a prompt
///
/// Without arguments the stored bytes are written untouched and no template
/// engine is involved. With arguments the prompt is rendered first.
pub fn show_prompt<W: Write + ?Sized>(
    store: &PromptStore,
    name: &str,
    args: &[String],
    out: &mut W,
) -> Result<(), SlashError> {
    debug!(%name, args = args.len(), "show_prompt: called");
    let content = store.resolve(name)?;

    if args.is_empty() {
        debug!("show_prompt: no arguments, writing raw content");
        out.write_all(&content).map_err(SlashError::Output)?;
    } else {
        let rendered = template::render(&content, args)?;
        info!("Rendered prompt {} with {} argument(s)", name, args.len());
        out.write_all(rendered.as_bytes()).map_err(SlashError::Output)?;
    }
    out.flush().map_err(SlashError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::mock::RecordingLauncher;
    use std::fs;
    use tempfile::TempDir;

    fn env_in(temp: &TempDir) -> Environment {
        Environment::new(temp.path().join("home"), temp.path().join("proj"), None)
    }

    fn run_action(action: Action, env: &Environment) -> Result<String, SlashError> {
        let mut launcher = RecordingLauncher::new();
        let mut out = Vec::<u8>::new();
        run(action, env, &Config::default(), &mut launcher, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_edit_then_show_renders_greeting() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);

        let replaced = run_action(
            Action::Edit {
                name: "greet".to_string(),
                extra: strings(&["-p", "Hello, {{.Arg1}}!"]),
            },
            &env,
        )
        .unwrap();
        assert_eq!(replaced, "Prompt replaced.\n");

        let shown = run_action(
            Action::Show {
                name: "greet".to_string(),
                args: strings(&["World"]),
            },
            &env,
        )
        .unwrap();
        assert_eq!(shown, "Hello, World!");
    }

    #[test]
    fn test_show_without_args_is_raw() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);
        fs::create_dir_all(env.config_dir()).unwrap();
        // Would be a parse error if it went through the template engine
        let raw = "Broken {{#if}} template {{.Arg1}}\n";
        fs::write(env.config_dir().join("raw.md"), raw).unwrap();

        let shown = run_action(
            Action::Show {
                name: "raw".to_string(),
                args: vec![],
            },
            &env,
        )
        .unwrap();
        assert_eq!(shown, raw);
    }

    #[test]
    fn test_show_missing_prompt() {
        let temp = TempDir::new().unwrap();
        let err = run_action(
            Action::Show {
                name: "ghost".to_string(),
                args: vec![],
            },
            &env_in(&temp),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "prompt not found: ghost");
    }

    #[test]
    fn test_failed_render_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);
        let store = PromptStore::new(&env);
        store.write("bad", b"before {{nope Arg1}} after").unwrap();

        let mut out = Vec::<u8>::new();
        let err = show_prompt(&store, "bad", &strings(&["x"]), &mut out).unwrap_err();
        assert!(matches!(err, SlashError::TemplateExecution(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_reserved_edit_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);

        let err = run_action(
            Action::Edit {
                name: "help".to_string(),
                extra: strings(&["-p", "x"]),
            },
            &env,
        )
        .unwrap_err();
        assert!(matches!(err, SlashError::ReservedName { .. }));
        assert!(!env.config_dir().exists());
    }

    #[test]
    fn test_help_and_version() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);

        assert!(run_action(Action::Help, &env).unwrap().contains("Usage: slash"));
        assert_eq!(run_action(Action::Version, &env).unwrap(), format!("{}\n", crate::VERSION));
    }
}
