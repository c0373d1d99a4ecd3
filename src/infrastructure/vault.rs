//! File system vault

use crate::domain::{Note, VaultFile};
use crate::error::{FlatnoteError, Result};
use crate::infrastructure::settings::{Settings, VAULT_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Host capabilities the commands run against
pub trait Vault {
    /// Get the root directory of this vault
    fn root(&self) -> &Path;

    /// Every file in the vault, ordered by relative path
    fn list_files(&self) -> Result<Vec<VaultFile>>;

    fn read_note_text(&self, note: &Note) -> Result<String>;

    fn read_binary(&self, file: &VaultFile) -> Result<Vec<u8>>;

    /// Replace a note's content
    fn write_note_text(&self, note: &Note, content: &str) -> Result<()>;

    /// Load settings merged over the defaults
    fn load_settings(&self) -> Result<Settings>;

    fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// Show a transient message to the user
    fn notify(&self, message: &str);
}

/// File system implementation of Vault
#[derive(Debug, Clone)]
pub struct FileSystemVault {
    pub root: PathBuf,
}

impl FileSystemVault {
    /// Create a new vault with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemVault { root }
    }

    /// Discover the vault root by walking up from current directory
    /// First checks FLATNOTE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FLATNOTE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_vault_dir(&path) {
                return Ok(FileSystemVault::new(path));
            } else {
                return Err(FlatnoteError::Config(format!(
                    "FLATNOTE_ROOT is set to '{}' but no .flatnote directory found. \
                    Run 'flatnote init' in that directory or unset FLATNOTE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the vault root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_vault_dir(&current) {
                return Ok(FileSystemVault::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(FlatnoteError::NotVault(start.to_path_buf())),
            }
        }
    }

    fn has_vault_dir(path: &Path) -> bool {
        path.join(VAULT_DIR).is_dir()
    }

    /// Create the .flatnote directory
    pub fn initialize(&self) -> Result<()> {
        let vault_dir = self.root.join(VAULT_DIR);

        if vault_dir.exists() {
            return Err(FlatnoteError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&vault_dir)?;
        Ok(())
    }

    /// Resolve a user-supplied note path to a note inside the vault.
    ///
    /// The path is tried against `cwd` first, then against the vault root.
    pub fn resolve_note(&self, cwd: &Path, arg: &Path) -> Result<Note> {
        let candidates = [cwd.join(arg), self.root.join(arg)];
        let root = self.root.canonicalize()?;

        for candidate in candidates {
            if !candidate.is_file() {
                continue;
            }
            let Ok(full) = candidate.canonicalize() else {
                continue;
            };
            if let Ok(rel) = full.strip_prefix(&root) {
                return Ok(Note::new(rel.to_path_buf()));
            }
        }

        Err(FlatnoteError::NoteNotFound(arg.to_path_buf()))
    }

    /// Write content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// Symlinks are followed so the link target is updated, and the existing
    /// file's permissions carry over. The temp file never outlives a failure.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let tmp_name = format!(
            "{}.flatnote-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("note.md"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        let result = Self::replace_with(&tmp_path, &path);
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn replace_with(tmp_path: &Path, path: &Path) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(tmp_path, metadata.permissions())?;
        }

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(tmp_path, path)
    }
}

impl Vault for FileSystemVault {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_files(&self) -> Result<Vec<VaultFile>> {
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        let mut files = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            files.push(VaultFile::new(rel.to_path_buf()));
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn read_note_text(&self, note: &Note) -> Result<String> {
        let path = self.root.join(&note.path);
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FlatnoteError::NoteNotFound(note.path.clone())
            } else {
                FlatnoteError::Io(e)
            }
        })
    }

    fn read_binary(&self, file: &VaultFile) -> Result<Vec<u8>> {
        fs::read(self.root.join(&file.path)).map_err(FlatnoteError::Io)
    }

    fn write_note_text(&self, note: &Note, content: &str) -> Result<()> {
        let path = self.root.join(&note.path);
        Self::write_atomic(&path, content)
            .map_err(|source| FlatnoteError::WriteFailed { path, source })
    }

    fn load_settings(&self) -> Result<Settings> {
        Settings::load_from_dir(&self.root)
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        settings.save_to_dir(&self.root)
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}
