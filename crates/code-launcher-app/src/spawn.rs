//! Detached process spawning.
//!
//! The editor is a long-running GUI program. We start it and forget it: no
//! waiting, no output capture, no exit status.

use std::ffi::{OsStr, OsString};
use std::process::Command;

use code_launcher_core::prelude::*;

/// Windows process creation flag that suppresses the console window.
pub const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Starts a program with the given arguments and returns immediately.
#[cfg_attr(test, mockall::automock)]
pub trait Spawner {
    fn spawn(&self, program: &OsStr, args: &[OsString]) -> std::io::Result<()>;
}

/// Spawner backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    fn spawn(&self, program: &OsStr, args: &[OsString]) -> std::io::Result<()> {
        let mut command = Command::new(program);
        command.args(args);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        // Dropping the Child does not kill or reap it.
        let child = command.spawn()?;
        debug!("Editor started with PID {}", child.id());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_missing_program_is_not_found() {
        let err = DetachedSpawner
            .spawn(OsStr::new("code-launcher-test-no-such-program"), &[])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_returns_without_waiting() {
        let started = std::time::Instant::now();
        DetachedSpawner
            .spawn(OsStr::new("sleep"), &[OsString::from("5")])
            .unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }
}
