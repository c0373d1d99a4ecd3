//! Error types for flatnote

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the flatnote application
#[derive(Debug, Error)]
pub enum FlatnoteError {
    #[error("Not a flatnote vault: {0}")]
    NotVault(PathBuf),

    #[error("No note is currently open")]
    NoActiveNote,

    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FlatnoteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FlatnoteError::NotVault(_) => 2,
            FlatnoteError::NoActiveNote => 3,
            FlatnoteError::NoteNotFound(_) => 4,
            FlatnoteError::WriteFailed { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FlatnoteError::NotVault(path) => {
                format!(
                    "Not a flatnote vault: {}\n\n\
                    Suggestions:\n\
                    • Run 'flatnote init' in your notes directory\n\
                    • Navigate to an existing vault\n\
                    • Set FLATNOTE_ROOT environment variable to your vault path",
                    path.display()
                )
            }
            FlatnoteError::NoActiveNote => {
                "No note is currently open\n\n\
                Pass the note to process, e.g.:\n\
                flatnote export notes/trip.md\n\
                flatnote flatten notes/trip.md"
                    .to_string()
            }
            FlatnoteError::NoteNotFound(path) => {
                format!(
                    "Note not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path is relative to the current directory or the vault root\n\
                    • The note must live inside the vault",
                    path.display()
                )
            }
            FlatnoteError::WriteFailed { path, source } => {
                format!(
                    "Failed to write {}: {}\n\n\
                    Suggestions:\n\
                    • Check that the directory is writable\n\
                    • Change the export directory: flatnote config export-path <dir>",
                    path.display(),
                    source
                )
            }
            FlatnoteError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: flatnote config export-path ~/Documents/exports",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FlatnoteError
pub type Result<T> = std::result::Result<T, FlatnoteError>;
