//! In-memory vault for unit tests

use crate::domain::{Note, VaultFile};
use crate::error::{FlatnoteError, Result};
use crate::infrastructure::{Settings, Vault};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct MemoryVault {
    root: PathBuf,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    unreadable: Vec<PathBuf>,
    settings: RefCell<Option<Settings>>,
    pub notices: RefCell<Vec<String>>,
}

impl MemoryVault {
    pub fn new(root: &str) -> Self {
        MemoryVault {
            root: PathBuf::from(root),
            ..Default::default()
        }
    }

    pub fn with_file(self, path: &str, bytes: &[u8]) -> Self {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), bytes.to_vec());
        self
    }

    /// Listed in the index, but every read fails
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), Vec::new());
        self.unreadable.push(PathBuf::from(path));
        self
    }

    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn saved_settings(&self) -> Option<Settings> {
        self.settings.borrow().clone()
    }
}

impl Vault for MemoryVault {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_files(&self) -> Result<Vec<VaultFile>> {
        Ok(self
            .files
            .borrow()
            .keys()
            .map(|path| VaultFile::new(path.clone()))
            .collect())
    }

    fn read_note_text(&self, note: &Note) -> Result<String> {
        let bytes = self
            .contents(&note.path.to_string_lossy())
            .ok_or_else(|| FlatnoteError::NoteNotFound(note.path.clone()))?;
        String::from_utf8(bytes).map_err(|e| FlatnoteError::Io(Error::new(ErrorKind::InvalidData, e)))
    }

    fn read_binary(&self, file: &VaultFile) -> Result<Vec<u8>> {
        if self.unreadable.contains(&file.path) {
            return Err(FlatnoteError::Io(Error::new(
                ErrorKind::PermissionDenied,
                "unreadable",
            )));
        }
        self.files
            .borrow()
            .get(&file.path)
            .cloned()
            .ok_or_else(|| FlatnoteError::Io(Error::from(ErrorKind::NotFound)))
    }

    fn write_note_text(&self, note: &Note, content: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(note.path.clone(), content.as_bytes().to_vec());
        Ok(())
    }

    fn load_settings(&self) -> Result<Settings> {
        Ok(self.settings.borrow().clone().unwrap_or_default())
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        *self.settings.borrow_mut() = Some(settings.clone());
        Ok(())
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
