//! Editor executable resolution.
//!
//! Two launcher variants exist. The *system* variant looks for a Visual Studio
//! Code that is already installed on the machine; the *bundled* variant uses
//! the copy shipped next to the host application, under
//! `<launcher_dir>/../vscode/<platform subtree>`.
//!
//! Resolution is best-effort and never fails. A wrong guess only surfaces when
//! the spawn itself fails.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use code_launcher_core::prelude::*;
use code_launcher_core::{ExecutableLocation, OsFamily, PlatformContext};

/// Environment variable that overrides the system editor command.
pub const OVERRIDE_ENV: &str = "RENPY_VSCODE";

/// Standard macOS install location of the `code` CLI.
pub const MAC_SYSTEM_CODE: &str =
    "/Applications/Visual Studio Code.app/Contents/Resources/app/bin/code";

const DEFAULT_COMMAND: &str = "code";
const WINDOWS_COMMAND: &str = "code.cmd";

/// Name of the bundled install directory, a sibling of the launcher directory.
pub const BUNDLE_DIR_NAME: &str = "vscode";

// ─────────────────────────────────────────────────────────────────────────────
// Variant
// ─────────────────────────────────────────────────────────────────────────────

/// Which editor installation this launcher drives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorVariant {
    /// An editor installed on the host.
    #[default]
    System,
    /// The editor shipped alongside the host application.
    Bundled {
        /// Install root. `None` means `<launcher_dir>/../vscode`.
        install_dir: Option<PathBuf>,
    },
}

impl EditorVariant {
    /// Bundled variant at the default location.
    pub fn bundled() -> Self {
        EditorVariant::Bundled { install_dir: None }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, EditorVariant::System)
    }

    /// Resolve the editor executable for this variant.
    ///
    /// Reads [`OVERRIDE_ENV`] at call time and checks the real filesystem
    /// for the macOS system install.
    pub fn resolve(&self, ctx: &PlatformContext) -> ExecutableLocation {
        let location = match self {
            EditorVariant::System => {
                let override_value = std::env::var_os(OVERRIDE_ENV);
                resolve_system(ctx, override_value.as_deref(), &|path: &Path| path.exists())
            }
            EditorVariant::Bundled { install_dir } => {
                resolve_bundled(ctx, install_dir.as_deref())
            }
        };

        log_availability(&location);
        location
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve a system-installed editor.
///
/// # Arguments
///
/// * `override_value` - Value of [`OVERRIDE_ENV`], used verbatim when present
///   (even if empty)
/// * `exists` - Filesystem probe for the macOS install path
pub fn resolve_system(
    ctx: &PlatformContext,
    override_value: Option<&OsStr>,
    exists: &dyn Fn(&Path) -> bool,
) -> ExecutableLocation {
    if let Some(value) = override_value {
        return ExecutableLocation::Override(value.to_os_string());
    }

    match ctx.os {
        OsFamily::Windows => ExecutableLocation::command(WINDOWS_COMMAND),
        OsFamily::Macintosh if exists(Path::new(MAC_SYSTEM_CODE)) => {
            ExecutableLocation::Path(PathBuf::from(MAC_SYSTEM_CODE))
        }
        _ => ExecutableLocation::command(DEFAULT_COMMAND),
    }
}

/// Resolve the bundled editor under `install_dir` (or the default install root).
pub fn resolve_bundled(ctx: &PlatformContext, install_dir: Option<&Path>) -> ExecutableLocation {
    let root = install_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_install_dir(ctx));

    match ctx.os {
        OsFamily::Windows => ExecutableLocation::Path(
            root.join("VSCode-win32-x64").join("bin").join(WINDOWS_COMMAND),
        ),
        OsFamily::Macintosh => ExecutableLocation::Path(
            root.join("Visual Studio Code.app")
                .join("Contents")
                .join("Resources")
                .join("app")
                .join("bin")
                .join(DEFAULT_COMMAND),
        ),
        OsFamily::Linux => ExecutableLocation::Path(
            root.join(format!("VSCode-linux-{}", linux_arch_dir(&ctx.arch)))
                .join("bin")
                .join(DEFAULT_COMMAND),
        ),
        OsFamily::Other => ExecutableLocation::command(DEFAULT_COMMAND),
    }
}

/// `<launcher_dir>/../vscode`, with the `..` applied lexically.
pub fn default_install_dir(ctx: &PlatformContext) -> PathBuf {
    ctx.launcher_dir
        .parent()
        .unwrap_or(&ctx.launcher_dir)
        .join(BUNDLE_DIR_NAME)
}

/// Architecture suffix of the bundled Linux build directory.
///
/// `arm64` and `arm` are the names Rust reports for the same CPUs.
pub fn linux_arch_dir(arch: &str) -> &'static str {
    match arch {
        "aarch64" | "arm64" => "arm64",
        "armv7l" | "arm" => "arm",
        _ => "x86_64",
    }
}

fn log_availability(location: &ExecutableLocation) {
    match location {
        ExecutableLocation::Command(name) | ExecutableLocation::Override(name) => {
            match which::which(name) {
                Ok(found) => debug!("Editor {} resolves to {}", location, found.display()),
                Err(e) => debug!("Editor {} not found on PATH: {}", location, e),
            }
        }
        ExecutableLocation::Path(path) => {
            if !path.exists() {
                debug!("Editor executable does not exist: {}", path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::ffi::OsString;

    fn ctx(os: OsFamily, arch: &str) -> PlatformContext {
        PlatformContext::new(os, arch, Path::new("/renpy").join("launcher"))
    }

    fn bundle_root() -> PathBuf {
        Path::new("/renpy").join("vscode")
    }

    fn never(_: &Path) -> bool {
        false
    }

    fn always(_: &Path) -> bool {
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // System Variant Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_system_override_wins_everywhere() {
        for os in [
            OsFamily::Windows,
            OsFamily::Macintosh,
            OsFamily::Linux,
            OsFamily::Other,
        ] {
            let location = resolve_system(
                &ctx(os, "x86_64"),
                Some(OsStr::new("/opt/codium/bin/codium")),
                &always,
            );
            assert_eq!(
                location,
                ExecutableLocation::Override(OsString::from("/opt/codium/bin/codium"))
            );
        }
    }

    #[test]
    fn test_system_empty_override_is_used_verbatim() {
        let location =
            resolve_system(&ctx(OsFamily::Linux, "x86_64"), Some(OsStr::new("")), &never);
        assert_eq!(location.as_os_str(), OsStr::new(""));
    }

    #[test]
    fn test_system_windows_uses_code_cmd() {
        let location = resolve_system(&ctx(OsFamily::Windows, "x86_64"), None, &always);
        assert_eq!(location, ExecutableLocation::command("code.cmd"));
    }

    #[test]
    fn test_system_mac_uses_app_bundle_when_present() {
        let location = resolve_system(&ctx(OsFamily::Macintosh, "arm64"), None, &always);
        assert_eq!(location, ExecutableLocation::Path(PathBuf::from(MAC_SYSTEM_CODE)));
    }

    #[test]
    fn test_system_mac_falls_back_to_command() {
        let location = resolve_system(&ctx(OsFamily::Macintosh, "arm64"), None, &never);
        assert_eq!(location, ExecutableLocation::command("code"));
    }

    #[test]
    fn test_system_mac_probes_the_app_bundle_path() {
        let probe = |path: &Path| path == Path::new(MAC_SYSTEM_CODE);
        let location = resolve_system(&ctx(OsFamily::Macintosh, "x86_64"), None, &probe);
        assert!(matches!(location, ExecutableLocation::Path(_)));
    }

    #[test]
    fn test_system_linux_and_unknown_use_code() {
        for os in [OsFamily::Linux, OsFamily::Other] {
            let location = resolve_system(&ctx(os, "x86_64"), None, &always);
            assert_eq!(location, ExecutableLocation::command("code"));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bundled Variant Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_default_install_dir_is_sibling_of_launcher() {
        assert_eq!(default_install_dir(&ctx(OsFamily::Linux, "x86_64")), bundle_root());
    }

    #[test]
    fn test_bundled_linux_x86_64() {
        let location = resolve_bundled(&ctx(OsFamily::Linux, "x86_64"), None);
        assert_eq!(
            location,
            ExecutableLocation::Path(
                bundle_root().join("VSCode-linux-x86_64").join("bin").join("code")
            )
        );
    }

    #[test]
    fn test_bundled_linux_arch_mapping() {
        let cases = [
            ("aarch64", "VSCode-linux-arm64"),
            ("arm64", "VSCode-linux-arm64"),
            ("armv7l", "VSCode-linux-arm"),
            ("arm", "VSCode-linux-arm"),
            ("x86_64", "VSCode-linux-x86_64"),
            ("riscv64", "VSCode-linux-x86_64"),
            ("", "VSCode-linux-x86_64"),
        ];

        for (arch, subdir) in cases {
            let location = resolve_bundled(&ctx(OsFamily::Linux, arch), None);
            assert_eq!(
                location,
                ExecutableLocation::Path(bundle_root().join(subdir).join("bin").join("code")),
                "arch {arch}"
            );
        }
    }

    #[test]
    fn test_bundled_windows_ignores_arch() {
        for arch in ["x86_64", "aarch64", "armv7l"] {
            let location = resolve_bundled(&ctx(OsFamily::Windows, arch), None);
            assert_eq!(
                location,
                ExecutableLocation::Path(
                    bundle_root().join("VSCode-win32-x64").join("bin").join("code.cmd")
                )
            );
            assert!(!location.to_string().contains("linux"));
        }
    }

    #[test]
    fn test_bundled_mac_app_interior() {
        let location = resolve_bundled(&ctx(OsFamily::Macintosh, "aarch64"), None);
        let expected = bundle_root()
            .join("Visual Studio Code.app")
            .join("Contents")
            .join("Resources")
            .join("app")
            .join("bin")
            .join("code");
        assert_eq!(location, ExecutableLocation::Path(expected));
    }

    #[test]
    fn test_bundled_unknown_platform_uses_code() {
        let location = resolve_bundled(&ctx(OsFamily::Other, "x86_64"), None);
        assert_eq!(location, ExecutableLocation::command("code"));
    }

    #[test]
    fn test_bundled_custom_install_dir() {
        let root = Path::new("/srv").join("editors");
        let location = resolve_bundled(&ctx(OsFamily::Linux, "aarch64"), Some(&root));
        assert_eq!(
            location,
            ExecutableLocation::Path(root.join("VSCode-linux-arm64").join("bin").join("code"))
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Environment Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    #[serial]
    fn test_variant_resolve_reads_override_env() {
        std::env::set_var(OVERRIDE_ENV, "/custom/code");
        let location = EditorVariant::System.resolve(&ctx(OsFamily::Linux, "x86_64"));
        std::env::remove_var(OVERRIDE_ENV);

        assert_eq!(location, ExecutableLocation::Override(OsString::from("/custom/code")));
    }

    #[test]
    #[serial]
    fn test_variant_resolve_without_override() {
        std::env::remove_var(OVERRIDE_ENV);
        let location = EditorVariant::System.resolve(&ctx(OsFamily::Windows, "x86_64"));
        assert_eq!(location, ExecutableLocation::command("code.cmd"));
    }

    #[test]
    #[serial]
    fn test_bundled_variant_ignores_override_env() {
        std::env::set_var(OVERRIDE_ENV, "/custom/code");
        let location = EditorVariant::bundled().resolve(&ctx(OsFamily::Linux, "x86_64"));
        std::env::remove_var(OVERRIDE_ENV);

        assert!(matches!(location, ExecutableLocation::Path(_)));
    }

    #[test]
    fn test_default_variant_is_system() {
        assert!(EditorVariant::default().is_system());
        assert!(!EditorVariant::bundled().is_system());
    }
}
