//! Inline embedded images use case
//!
//! Replaces every `![[name]]` embed whose attachment exists in the vault
//! with `![name](data:<mime>;base64,<payload>)`.

use crate::domain::{
    apply_replacements, data_uri, find_embeds, inline_markup, mime_type_for_extension, Note,
    Replacement, VaultFile,
};
use crate::error::Result;
use crate::infrastructure::Vault;
use std::collections::HashMap;

/// Notice shown when a single attachment cannot be processed
pub const IMAGE_FAILURE_NOTICE: &str = "Failed to process image";

/// Result of inlining one note's images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineOutcome {
    /// Transformed note text
    pub content: String,

    /// Number of embeds replaced
    pub inlined: usize,

    /// Embed names with no matching file in the vault
    pub missing: Vec<String>,

    /// Embed names whose file could not be read
    pub failed: Vec<String>,
}

/// Read `note` and inline its embedded images. The note itself is not modified.
pub fn inline_images<V: Vault>(vault: &V, note: &Note) -> Result<InlineOutcome> {
    let content = vault.read_note_text(note)?;
    let files = vault.list_files()?;
    Ok(inline_text(vault, &content, &files))
}

/// Inline embeds in `text` using `files` as the vault index.
///
/// Per-image read failures are logged, surfaced as a notice, and leave the
/// embed untouched.
pub fn inline_text<V: Vault>(vault: &V, text: &str, files: &[VaultFile]) -> InlineOutcome {
    // First file wins when names repeat
    let mut by_name: HashMap<&str, &VaultFile> = HashMap::new();
    for file in files {
        by_name.entry(file.name.as_str()).or_insert(file);
    }

    let mut replacements = Vec::new();
    let mut missing = Vec::new();
    let mut failed = Vec::new();

    for embed in find_embeds(text) {
        let Some(file) = by_name.get(embed.name.as_str()) else {
            log::debug!("No attachment named {} in vault", embed.name);
            if !missing.contains(&embed.name) {
                missing.push(embed.name);
            }
            continue;
        };

        match vault.read_binary(file) {
            Ok(bytes) => {
                let uri = data_uri(mime_type_for_extension(&file.extension), &bytes);
                let markup = inline_markup(&embed.name, &uri);
                replacements.push(Replacement::new(embed.range, embed.original, markup));
            }
            Err(e) => {
                log::error!("Failed to process image {}: {}", embed.name, e);
                vault.notify(IMAGE_FAILURE_NOTICE);
                failed.push(embed.name);
            }
        }
    }

    InlineOutcome {
        content: apply_replacements(text, &replacements),
        inlined: replacements.len(),
        missing,
        failed,
    }
}
