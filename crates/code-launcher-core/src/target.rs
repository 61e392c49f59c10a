//! Launch targets and the request that accumulates them

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use crate::platform::encode_arg;

/// A single editor argument: a file (optionally at a line) or a project folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File { path: PathBuf, line: Option<u32> },
    Project { path: PathBuf },
}

impl Target {
    pub fn file(path: impl Into<PathBuf>, line: Option<u32>) -> Self {
        Target::File {
            path: path.into(),
            line,
        }
    }

    pub fn project(path: impl Into<PathBuf>) -> Self {
        Target::Project { path: path.into() }
    }

    /// Render to the single command-line token the editor expects.
    ///
    /// Files with a line become `path:line`. Line `0` counts as no line.
    pub fn render(&self) -> OsString {
        match self {
            Target::File {
                path,
                line: Some(line),
            } if *line > 0 => {
                let mut token = encode_arg(path);
                token.push(format!(":{line}"));
                token
            }
            Target::File { path, .. } | Target::Project { path } => encode_arg(path),
        }
    }
}

/// Targets collected between `begin()` and `end()`, in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchRequest {
    targets: Vec<Target>,
}

impl LaunchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: Target) {
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets in the order they were added.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Rendered targets, most recently added first.
    pub fn editor_args(&self) -> Vec<OsString> {
        self.targets.iter().rev().map(Target::render).collect()
    }
}

/// Where the editor binary was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutableLocation {
    /// Bare command name, looked up on `PATH` by the OS.
    Command(OsString),
    /// Absolute path to a known installation.
    Path(PathBuf),
    /// Taken verbatim from the override environment variable.
    Override(OsString),
}

impl ExecutableLocation {
    pub fn command(name: impl Into<OsString>) -> Self {
        ExecutableLocation::Command(name.into())
    }

    pub fn as_os_str(&self) -> &OsStr {
        match self {
            ExecutableLocation::Command(name) | ExecutableLocation::Override(name) => name,
            ExecutableLocation::Path(path) => path.as_os_str(),
        }
    }
}

impl fmt::Display for ExecutableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_os_str().to_string_lossy())
    }
}
