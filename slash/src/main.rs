use std::io::{self, IsTerminal};
use std::process::ExitCode;

use colored::*;
use eyre::{Result, eyre};
use tracing::{debug, info};

use slash::cli::Action;
use slash::config::Config;
use slash::env::Environment;
use slash::{SystemLauncher, commands};

fn setup_logging(config_log_level: Option<&str>) -> Result<()> {
    // Logs go to stderr so prompt output on stdout stays clean
    let level = match config_log_level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") | None => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", other);
            tracing::Level::WARN
        }
    };

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre!("Failed to setup logging: {}", e))?;

    debug!(?level, "setup_logging: initialized");
    Ok(())
}

fn run() -> Result<()> {
    let action = Action::parse_from(std::env::args_os())?;

    let mut stdout = io::stdout().lock();
    match action {
        // Built-ins answer without touching the home directory
        Action::Help => return Ok(commands::print_help(&mut stdout)?),
        Action::Version => return Ok(commands::print_version(&mut stdout)?),
        _ => {}
    }

    let env = Environment::detect()?;

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(&env);
    setup_logging(config_log_level.as_deref())?;
    info!("slash {} starting", slash::VERSION);
    debug!(?action, home = ?env.home, cwd = ?env.cwd, editor_var = ?env.editor_var, "run: dispatching");

    let config = Config::load(&env);

    commands::run(action, &env, &config, &mut SystemLauncher, &mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            ExitCode::FAILURE
        }
    }
}
