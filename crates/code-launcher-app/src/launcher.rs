//! The editor launcher.
//!
//! A launch is a `begin()`, any number of `open()`/`open_project()` calls, and
//! an `end()` that spawns the editor once with every target. Targets are handed
//! to the editor most-recent-first, behind the `-g` (goto) flag:
//!
//! ```text
//! <executable> -g <target_n> ... <target_1>
//! ```

use std::ffi::OsString;
use std::path::Path;

use code_launcher_core::prelude::*;
use code_launcher_core::{encode_arg, ExecutableLocation, LaunchRequest, PlatformContext, Target};

use crate::resolve::EditorVariant;
use crate::spawn::{DetachedSpawner, Spawner};

/// Flag telling the editor that `path:line` targets are goto locations.
pub const GOTO_FLAG: &str = "-g";

// ─────────────────────────────────────────────────────────────────────────────
// Host Capability
// ─────────────────────────────────────────────────────────────────────────────

/// The "open in external editor" capability a host application drives.
pub trait Editor {
    /// Whether the editor can open a whole project directory.
    fn has_projects(&self) -> bool {
        false
    }

    /// Start collecting targets, discarding anything collected before.
    fn begin(&mut self, new_window: bool);

    /// Add a file, optionally at a line.
    fn open(&mut self, path: &Path, line: Option<u32>);

    /// Add a project directory.
    fn open_project(&mut self, path: &Path);

    /// Launch the editor with the collected targets.
    fn end(&mut self, new_window: bool) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Launcher
// ─────────────────────────────────────────────────────────────────────────────

/// Launches Visual Studio Code for a host application.
///
/// Not meant to be shared between threads: one launch is in flight at a time.
#[derive(Debug)]
pub struct EditorLauncher<S = DetachedSpawner> {
    variant: EditorVariant,
    platform: PlatformContext,
    spawner: S,
    /// `None` while idle, `Some` between `begin()` and `end()`.
    request: Option<LaunchRequest>,
}

impl EditorLauncher<DetachedSpawner> {
    pub fn new(variant: EditorVariant, platform: PlatformContext) -> Self {
        Self::with_spawner(variant, platform, DetachedSpawner)
    }
}

impl<S: Spawner> EditorLauncher<S> {
    pub fn with_spawner(variant: EditorVariant, platform: PlatformContext, spawner: S) -> Self {
        Self {
            variant,
            platform,
            spawner,
            request: None,
        }
    }

    pub fn variant(&self) -> &EditorVariant {
        &self.variant
    }

    pub fn platform(&self) -> &PlatformContext {
        &self.platform
    }

    /// True between `begin()` and `end()`.
    pub fn is_accumulating(&self) -> bool {
        self.request.is_some()
    }

    /// Targets collected so far, if a launch is in progress.
    pub fn pending(&self) -> Option<&LaunchRequest> {
        self.request.as_ref()
    }

    /// Resolve the editor binary for this launcher's variant and platform.
    pub fn resolve_executable(&self) -> ExecutableLocation {
        self.variant.resolve(&self.platform)
    }

    fn request_mut(&mut self, operation: &str) -> &mut LaunchRequest {
        match self.request.as_mut() {
            Some(request) => request,
            None => panic!("EditorLauncher::{operation}() called without begin()"),
        }
    }
}

impl<S: Spawner> Editor for EditorLauncher<S> {
    fn has_projects(&self) -> bool {
        true
    }

    fn begin(&mut self, new_window: bool) {
        trace!(new_window, "Beginning editor launch");
        self.request = Some(LaunchRequest::new());
    }

    /// # Panics
    ///
    /// If called without a preceding `begin()`.
    fn open(&mut self, path: &Path, line: Option<u32>) {
        self.request_mut("open").push(Target::file(path, line));
    }

    /// # Panics
    ///
    /// If called without a preceding `begin()`.
    fn open_project(&mut self, path: &Path) {
        self.request_mut("open_project").push(Target::project(path));
    }

    /// Spawn the editor and return to idle, whether or not the spawn worked.
    ///
    /// # Errors
    ///
    /// [`Error::LaunchFailure`] if the OS could not start the editor.
    ///
    /// # Panics
    ///
    /// If called without a preceding `begin()`.
    fn end(&mut self, new_window: bool) -> Result<()> {
        let request = match self.request.take() {
            Some(request) => request,
            None => panic!("EditorLauncher::end() called without begin()"),
        };
        trace!(new_window, "Ending editor launch");

        let executable = self.resolve_executable();
        let program = encode_arg(executable.as_os_str());
        let args = spawn_args(&request);

        info!(
            "Launching {} with {} target(s)",
            executable,
            request.len()
        );

        self.spawner
            .spawn(&program, &args)
            .map_err(|e| Error::launch_failure(program, e))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Command Line
// ─────────────────────────────────────────────────────────────────────────────

/// Arguments after the program name: `-g` then targets, newest first.
pub fn spawn_args(request: &LaunchRequest) -> Vec<OsString> {
    let mut args = Vec::with_capacity(request.len() + 1);
    args.push(OsString::from(GOTO_FLAG));
    args.extend(request.editor_args());
    args
}

/// The full argument vector, program first.
pub fn command_line(executable: &ExecutableLocation, request: &LaunchRequest) -> Vec<OsString> {
    let mut argv = vec![encode_arg(executable.as_os_str())];
    argv.extend(spawn_args(request));
    argv
}
