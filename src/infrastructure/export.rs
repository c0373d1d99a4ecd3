//! Writing exported notes to disk

use crate::error::{FlatnoteError, Result};
use std::fs;
use std::path::PathBuf;

/// Writes exported note text into a directory outside the vault
#[derive(Debug, Clone)]
pub struct ExportSink {
    dir: PathBuf,
}

impl ExportSink {
    pub fn new(dir: PathBuf) -> Self {
        ExportSink { dir }
    }

    /// Write `content` to `<dir>/<file_name>`, creating the directory if
    /// needed and overwriting an existing file. Returns the written path.
    pub fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| FlatnoteError::WriteFailed {
                path: self.dir.clone(),
                source,
            })?;
        }

        let path = self.dir.join(file_name);
        fs::write(&path, content).map_err(|source| FlatnoteError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
