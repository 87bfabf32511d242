//! Command-line parsing and dispatch classification
//!
//! The first argument is either a built-in command (`help`, `version`,
//! `edit`) or the name of a prompt. Built-in words can never be used as
//! prompt names.

use std::ffi::OsString;

use clap::Parser;

use crate::error::SlashError;

/// Built-in commands that a prompt may not shadow
pub const RESERVED_NAMES: [&str; 3] = ["help", "version", "edit"];

pub const USAGE: &str = "usage: slash <prompt> [args...]";
pub const EDIT_USAGE: &str = "usage: slash edit <name> [-p <text...>]";

pub const HELP: &str = "\
Usage: slash <prompt> [args...]

Commands:
  edit <name>              Create or edit a prompt in your editor
  edit <name> -p <text...> Replace a prompt's content without an editor
  help, -h, --help         Show this help message
  version                  Print the program version

If <prompt> is a prompt name, its content is printed. If additional
arguments are provided, the prompt is rendered as a template with
{{.Arg1}}, {{.Arg2}}, ... bound to them in order.

Prompts are looked up in ~/.config/slash/<name>.md, then ./.slash/<name>.md.
The editor is taken from ~/.config/slash/config.json (\"editor\"), then
$EDITOR, then vi.";

/// slash - print, template and edit named prompts
///
/// Only the first argument goes through clap. Everything after it is handed
/// on untouched, so `-h` or `--` there are ordinary template arguments.
#[derive(Parser, Debug)]
#[command(
    name = "slash",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Built-in command or prompt name
    #[arg(allow_hyphen_values = true)]
    pub target: Option<String>,
}

/// What one invocation should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print usage text
    Help,
    /// Print the program version
    Version,
    /// Create or edit a prompt
    Edit { name: String, extra: Vec<String> },
    /// Print a prompt, rendered when `args` is non-empty
    Show { name: String, args: Vec<String> },
}

/// Check if `name` is a built-in command word
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Reject built-in command words as prompt names
pub fn check_reserved(name: &str) -> Result<(), SlashError> {
    if is_reserved(name) {
        return Err(SlashError::ReservedName { name: name.to_string() });
    }
    Ok(())
}

impl Action {
    /// Parse a full argument vector (program name first)
    pub fn parse_from<I, T>(argv: I) -> Result<Self, SlashError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

        let cli = Cli::try_parse_from(argv.iter().take(2)).map_err(|e| {
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            let reason = first.strip_prefix("error: ").unwrap_or(first);
            SlashError::Usage(format!("{}; {}", reason, USAGE))
        })?;

        let rest = argv
            .into_iter()
            .skip(2)
            .map(|arg| {
                arg.into_string().map_err(|arg| {
                    SlashError::Usage(format!("argument {:?} is not valid UTF-8; {}", arg, USAGE))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::classify(cli.target, rest)
    }

    /// Classify the first argument; `rest` is everything after it
    pub fn classify(target: Option<String>, rest: Vec<String>) -> Result<Self, SlashError> {
        let Some(target) = target else {
            return Err(SlashError::Usage(USAGE.to_string()));
        };

        match target.as_str() {
            "help" | "-h" | "--help" => Ok(Action::Help),
            "version" => Ok(Action::Version),
            "edit" => {
                let mut rest = rest.into_iter();
                let Some(name) = rest.next() else {
                    return Err(SlashError::Usage(EDIT_USAGE.to_string()));
                };
                check_reserved(&name)?;
                Ok(Action::Edit {
                    name,
                    extra: rest.collect(),
                })
            }
            _ => Ok(Action::Show { name: target, args: rest }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Action, SlashError> {
        Action::parse_from(std::iter::once("slash").chain(args.iter().copied()))
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_is_usage_error() {
        let err = parse(&[]).unwrap_err();
        assert!(matches!(err, SlashError::Usage(_)));
        assert!(err.to_string().contains("slash <prompt>"));
    }

    #[test]
    fn test_help_forms() {
        assert_eq!(parse(&["help"]).unwrap(), Action::Help);
        assert_eq!(parse(&["-h"]).unwrap(), Action::Help);
        assert_eq!(parse(&["--help"]).unwrap(), Action::Help);
    }

    #[test]
    fn test_version() {
        assert_eq!(parse(&["version"]).unwrap(), Action::Version);
    }

    #[test]
    fn test_show_with_args() {
        assert_eq!(
            parse(&["greet", "World", "again"]).unwrap(),
            Action::Show {
                name: "greet".to_string(),
                args: strings(&["World", "again"]),
            }
        );
    }

    #[test]
    fn test_show_passes_hyphen_args() {
        assert_eq!(
            parse(&["greet", "-p", "--flag"]).unwrap(),
            Action::Show {
                name: "greet".to_string(),
                args: strings(&["-p", "--flag"]),
            }
        );
    }

    #[test]
    fn test_edit_with_replacement() {
        assert_eq!(
            parse(&["edit", "greet", "-p", "Hello,", "{{.Arg1}}!"]).unwrap(),
            Action::Edit {
                name: "greet".to_string(),
                extra: strings(&["-p", "Hello,", "{{.Arg1}}!"]),
            }
        );
    }

    #[test]
    fn test_edit_without_name() {
        let err = parse(&["edit"]).unwrap_err();
        assert!(err.to_string().contains("slash edit <name>"));
    }

    #[test]
    fn test_edit_reserved_names() {
        for name in RESERVED_NAMES {
            let err = parse(&["edit", name, "-p", "x"]).unwrap_err();
            assert!(matches!(err, SlashError::ReservedName { .. }), "{name}");
        }
    }

    #[test]
    fn test_help_only_as_first_argument() {
        for flag in ["-h", "--help", "help"] {
            assert_eq!(
                parse(&["greet", flag]).unwrap(),
                Action::Show {
                    name: "greet".to_string(),
                    args: strings(&[flag]),
                }
            );
        }
    }

    #[test]
    fn test_edit_hyphen_name_is_not_help() {
        assert_eq!(
            parse(&["edit", "-h"]).unwrap(),
            Action::Edit {
                name: "-h".to_string(),
                extra: vec![],
            }
        );
    }

    #[test]
    fn test_double_dash_passed_through() {
        assert_eq!(
            parse(&["greet", "--", "x"]).unwrap(),
            Action::Show {
                name: "greet".to_string(),
                args: strings(&["--", "x"]),
            }
        );
        assert_eq!(
            parse(&["edit", "note", "-p", "--", "x"]).unwrap(),
            Action::Edit {
                name: "note".to_string(),
                extra: strings(&["-p", "--", "x"]),
            }
        );
    }

    #[test]
    fn test_hyphen_first_argument_is_a_prompt_name() {
        // Rejected later by name validation, not by the parser
        assert_eq!(
            parse(&["--bogus"]).unwrap(),
            Action::Show {
                name: "--bogus".to_string(),
                args: vec![],
            }
        );
    }
}
