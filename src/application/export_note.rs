//! Export note use case

use crate::application::inline_images;
use crate::domain::Note;
use crate::error::{FlatnoteError, Result};
use crate::infrastructure::{ExportSink, Vault};
use std::path::{Path, PathBuf};

/// Service for exporting a note with its images inlined
pub struct ExportNoteService<V: Vault> {
    vault: V,
}

impl<V: Vault> ExportNoteService<V> {
    /// Create a new export service
    pub fn new(vault: V) -> Self {
        ExportNoteService { vault }
    }

    /// Inline the note's images and write the result to
    /// `<export dir>/<basename>.md`. The note itself is left untouched.
    ///
    /// Returns the path of the exported file.
    pub fn execute(&self, note: Option<&Note>) -> Result<PathBuf> {
        let note = note.ok_or(FlatnoteError::NoActiveNote)?;
        let settings = self.vault.load_settings()?;

        let outcome = inline_images(&self.vault, note)?;
        log::info!(
            "Inlined {} image(s) in {} ({} missing, {} failed)",
            outcome.inlined,
            note.path.display(),
            outcome.missing.len(),
            outcome.failed.len()
        );

        let export_dir = settings.export_dir(self.vault.root());
        let file_name = note.export_file_name();
        if is_same_file(&export_dir.join(&file_name), &self.vault.root().join(&note.path)) {
            return Err(FlatnoteError::Config(format!(
                "Export target is the note itself: {}. Choose another export path.",
                note.path.display()
            )));
        }

        let sink = ExportSink::new(export_dir);
        let path = sink.write(&file_name, &outcome.content)?;

        self.vault.notify(&format!(
            "Note \"{}\" has been exported to {}",
            note.basename, settings.export_path
        ));

        Ok(path)
    }
}

/// Both paths exist and resolve to the same file
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
