//! Initialize vault use case

use crate::error::Result;
use crate::infrastructure::{FileSystemVault, Settings, Vault};
use std::fs;
use std::path::Path;

/// Initialize a new vault at the specified path with default settings.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let vault = FileSystemVault::new(path.to_path_buf());
    vault.initialize()?;

    let settings = Settings::default();
    vault.save_settings(&settings)?;

    println!("Initialized flatnote vault at {}", path.display());
    println!("Export path: {}", settings.export_path);

    Ok(())
}
