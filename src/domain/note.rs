//! Notes and vault files

use std::path::{Path, PathBuf};

/// A file in the vault's index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFile {
    /// Path relative to the vault root
    pub path: PathBuf,

    /// File name including extension
    pub name: String,

    /// Text after the last '.', empty when there is none
    pub extension: String,
}

impl VaultFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = extension_of(&name).to_string();

        VaultFile {
            path,
            name,
            extension,
        }
    }
}

/// A markdown note in the vault
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Path relative to the vault root
    pub path: PathBuf,

    /// File name without its extension
    pub basename: String,
}

impl Note {
    pub fn new(path: PathBuf) -> Self {
        let basename = basename_of(&path);
        Note { path, basename }
    }

    /// File name used when exporting this note
    pub fn export_file_name(&self) -> String {
        format!("{}.md", self.basename)
    }
}

fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}

fn basename_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(idx) if idx > 0 => name[..idx].to_string(),
        _ => name,
    }
}
