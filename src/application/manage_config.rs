//! Settings management use case

use crate::error::{FlatnoteError, Result};
use crate::infrastructure::{Settings, Vault};

/// Keys accepted by the config command
pub const VALID_KEYS: &str = "export-path";

/// Service for reading and editing vault settings
pub struct ConfigService<V: Vault> {
    vault: V,
}

impl<V: Vault> ConfigService<V> {
    /// Create a new config service
    pub fn new(vault: V) -> Self {
        ConfigService { vault }
    }

    /// Get a single setting value
    pub fn get(&self, key: &str) -> Result<String> {
        let settings = self.vault.load_settings()?;

        match key {
            "export-path" | "exportPath" => Ok(settings.export_path),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a setting value and persist the whole settings object
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut settings = self.vault.load_settings()?;

        match key {
            "export-path" | "exportPath" => settings.export_path = value.to_string(),
            _ => return Err(unknown_key(key)),
        }

        self.vault.save_settings(&settings)
    }

    /// List all settings
    pub fn list(&self) -> Result<Settings> {
        self.vault.load_settings()
    }
}

fn unknown_key(key: &str) -> FlatnoteError {
    FlatnoteError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}
