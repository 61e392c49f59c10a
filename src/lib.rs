//! Code Launcher Library
//!
//! Wires settings, platform detection and the [`EditorLauncher`] together for
//! the command-line entry point.

use std::ffi::OsString;
use std::path::Path;

use code_launcher_app::{load_settings, Editor, EditorLauncher};
use code_launcher_core::{PlatformContext, Result};

/// Open `files` with the editor variant configured next to the launcher.
pub fn run(files: &[OsString], platform: PlatformContext) -> Result<()> {
    let settings = load_settings(&platform.launcher_dir);
    let mut launcher = EditorLauncher::new(settings.editor_variant(), platform);
    open_files(&mut launcher, files)
}

/// One launch with every file as a target, no line numbers.
pub fn open_files<E: Editor + ?Sized>(editor: &mut E, files: &[OsString]) -> Result<()> {
    editor.begin(false);
    for file in files {
        editor.open(Path::new(file), None);
    }
    editor.end(false)
}
