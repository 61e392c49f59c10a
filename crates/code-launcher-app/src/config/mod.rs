//! Configuration file parsing for the code launcher
//!
//! Supports an optional `code-launcher.toml` next to the launcher executable.
//! The `RENPY_VSCODE` environment variable is not configuration; it is read
//! at resolution time (see [`crate::resolve`]).

pub mod settings;
pub mod types;

pub use settings::{init_config_file, load_settings, CONFIG_FILENAME};
pub use types::*;
