//! Host platform identification
//!
//! The launcher never consults process-wide platform state directly. Everything
//! it needs to pick an executable is captured once in a [`PlatformContext`] and
//! passed in, so resolution can be exercised for any OS from any OS.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result, ResultExt};

/// Operating system family, as far as editor resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Macintosh,
    Linux,
    /// BSDs and anything else. Resolution falls back to a bare command.
    Other,
}

impl OsFamily {
    /// Map a `std::env::consts::OS` value to a family.
    pub fn from_os_str(os: &str) -> Self {
        match os {
            "windows" => OsFamily::Windows,
            "macos" => OsFamily::Macintosh,
            "linux" => OsFamily::Linux,
            _ => OsFamily::Other,
        }
    }

    /// Family of the running process.
    pub fn current() -> Self {
        Self::from_os_str(std::env::consts::OS)
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Windows => "windows",
            OsFamily::Macintosh => "macintosh",
            OsFamily::Linux => "linux",
            OsFamily::Other => "other",
        };
        f.write_str(name)
    }
}

/// Everything about the host that executable resolution depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformContext {
    pub os: OsFamily,
    /// CPU architecture name, e.g. `x86_64`, `aarch64`, `armv7l`.
    pub arch: String,
    /// Directory holding the launcher itself. Bundled installs are found
    /// relative to it.
    pub launcher_dir: PathBuf,
}

impl PlatformContext {
    pub fn new(os: OsFamily, arch: impl Into<String>, launcher_dir: impl Into<PathBuf>) -> Self {
        Self {
            os,
            arch: arch.into(),
            launcher_dir: launcher_dir.into(),
        }
    }

    /// Detect the context of the running process.
    ///
    /// The launcher directory is the parent of `std::env::current_exe()`,
    /// canonicalized without Windows verbatim (`\\?\`) prefixes.
    pub fn detect() -> Result<Self> {
        let exe = std::env::current_exe().context("Locating launcher executable")?;
        let exe = dunce::canonicalize(&exe).unwrap_or(exe);
        let launcher_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::launcher_dir(format!("{} has no parent", exe.display())))?;

        Ok(Self::new(
            OsFamily::current(),
            std::env::consts::ARCH,
            launcher_dir,
        ))
    }
}

/// Encode an argument for the process spawn facility.
///
/// Arguments travel as `OsString` from the command line to the child
/// process, so this is a lossless copy on every platform.
pub fn encode_arg(arg: impl AsRef<OsStr>) -> OsString {
    arg.as_ref().to_os_string()
}
