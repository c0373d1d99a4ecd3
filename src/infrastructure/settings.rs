//! Settings persistence

use crate::error::{FlatnoteError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory marking a vault root
pub const VAULT_DIR: &str = ".flatnote";

/// Settings file inside the vault directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Export directory used before anything is saved
pub const DEFAULT_EXPORT_PATH: &str = "/Documents";

/// Directory under the home folder used when the export path is empty
const FALLBACK_EXPORT_DIR: &str = "NoteExports";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub export_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            export_path: DEFAULT_EXPORT_PATH.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from .flatnote/settings.toml, merged over the defaults.
    /// A vault that never saved settings gets the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let vault_dir = path.join(VAULT_DIR);
        if !vault_dir.is_dir() {
            return Err(FlatnoteError::NotVault(path.to_path_buf()));
        }

        let contents = match fs::read_to_string(vault_dir.join(SETTINGS_FILE)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => return Err(FlatnoteError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Save the whole settings object to .flatnote/settings.toml
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let vault_dir = path.join(VAULT_DIR);

        if !vault_dir.exists() {
            fs::create_dir(&vault_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(vault_dir.join(SETTINGS_FILE), contents)?;

        Ok(())
    }

    /// Resolve the export directory for a vault rooted at `root`.
    ///
    /// Empty falls back to `~/NoteExports`, relative paths are taken
    /// from the vault root.
    pub fn export_dir(&self, root: &Path) -> PathBuf {
        let configured = self.export_path.trim();

        if configured.is_empty() {
            return Self::fallback_export_dir();
        }

        let path = PathBuf::from(configured);
        if path.is_absolute() {
            path
        } else {
            root.join(path)
        }
    }

    fn fallback_export_dir() -> PathBuf {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join(FALLBACK_EXPORT_DIR)
    }
}
