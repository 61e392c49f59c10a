//! Settings parser for code-launcher.toml

use super::types::Settings;
use code_launcher_core::prelude::*;
use std::path::Path;

/// Settings file name, looked up in the launcher directory.
pub const CONFIG_FILENAME: &str = "code-launcher.toml";

/// Load settings from `<dir>/code-launcher.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default `code-launcher.toml` into `dir` if none exists
pub fn init_config_file(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        return Ok(());
    }

    std::fs::write(&config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write {}: {}", CONFIG_FILENAME, e)))?;

    info!("Created default {}", config_path.display());
    Ok(())
}

fn generate_default_config() -> String {
    r#"# Code Launcher Configuration

[editor]
# "system"  - use Visual Studio Code installed on this machine
#             (set RENPY_VSCODE to point at a specific binary)
# "bundled" - use the copy shipped next to the launcher, in ../vscode
variant = "system"
# Bundled install root (leave empty for ../vscode)
install_dir = ""
"#
    .to_string()
}
