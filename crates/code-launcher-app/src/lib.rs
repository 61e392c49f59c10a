//! code-launcher-app - Editor resolution and launching
//!
//! Resolves the Visual Studio Code executable for the configured variant
//! (system-installed or bundled), collects files and projects through the
//! [`Editor`] capability, and spawns the editor detached.

pub mod config;
pub mod launcher;
pub mod resolve;
pub mod spawn;

// Re-export primary types
pub use config::{load_settings, Settings};
pub use launcher::{command_line, spawn_args, Editor, EditorLauncher, GOTO_FLAG};
pub use resolve::{EditorVariant, OVERRIDE_ENV};
pub use spawn::{DetachedSpawner, Spawner};
