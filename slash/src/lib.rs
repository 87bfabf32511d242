//! slash - personal prompt manager
//!
//! Stores short text snippets ("prompts") as markdown files, prints them by
//! name, optionally fills positional arguments into them, and wraps an
//! external editor to create or change them.
//!
//! # Layout
//!
//! ```text
//! ~/.config/slash/
//! ├── config.json      # optional: {"editor": "nano"}
//! ├── greet.md         # primary store (read-write)
//! └── ...
//! ./.slash/
//! └── review.md        # project-local store (lookup only)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use slash::{Environment, PromptStore};
//!
//! let env = Environment::detect()?;
//! let store = PromptStore::new(&env);
//! let content = store.resolve("greet")?;
//! let rendered = slash::template::render(&content, &["World".to_string()])?;
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod editor;
pub mod env;
pub mod error;
pub mod store;
pub mod template;

pub use cli::{Action, Cli};
pub use config::Config;
pub use editor::{EditorExit, Launcher, SystemLauncher};
pub use env::Environment;
pub use error::SlashError;
pub use store::PromptStore;

/// Program version printed by `slash version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory under the home directory that holds prompts and config
pub const CONFIG_SUBDIR: &str = ".config/slash";

/// Project-local prompt directory, relative to the invocation directory
pub const LOCAL_DIR: &str = ".slash";

/// File extension of prompt files
pub const PROMPT_EXT: &str = "md";
