//! Flatten note use case

use crate::application::inline_images;
use crate::domain::Note;
use crate::error::{FlatnoteError, Result};
use crate::infrastructure::Vault;

/// Service for inlining a note's images in place
pub struct FlattenNoteService<V: Vault> {
    vault: V,
}

impl<V: Vault> FlattenNoteService<V> {
    /// Create a new flatten service
    pub fn new(vault: V) -> Self {
        FlattenNoteService { vault }
    }

    /// Replace the note's content with its image-inlined text.
    /// Returns the number of embeds replaced.
    pub fn execute(&self, note: Option<&Note>) -> Result<usize> {
        let note = note.ok_or(FlatnoteError::NoActiveNote)?;

        let outcome = inline_images(&self.vault, note)?;
        self.vault.write_note_text(note, &outcome.content)?;

        log::info!("Flattened {} image(s) in {}", outcome.inlined, note.path.display());
        self.vault
            .notify(&format!("Note \"{}\" has been flattened", note.basename));

        Ok(outcome.inlined)
    }
}
