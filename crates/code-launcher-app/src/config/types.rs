//! Configuration types for the code launcher

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::resolve::EditorVariant;

/// Root of `code-launcher.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,
}

impl Settings {
    /// The launcher variant these settings select.
    pub fn editor_variant(&self) -> EditorVariant {
        match self.editor.variant {
            VariantKind::System => EditorVariant::System,
            VariantKind::Bundled => EditorVariant::Bundled {
                install_dir: self.editor.install_dir(),
            },
        }
    }
}

/// Variant selector as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    #[default]
    System,
    Bundled,
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Which editor installation to launch.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EditorSettings {
    /// `system` for an installed editor, `bundled` for the shipped copy.
    #[serde(default)]
    pub variant: VariantKind,

    /// Bundled install root. Empty means `<launcher_dir>/../vscode`.
    #[serde(default)]
    pub install_dir: String,
}

impl EditorSettings {
    /// Configured install root, if one is set.
    pub fn install_dir(&self) -> Option<PathBuf> {
        let trimmed = self.install_dir.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
