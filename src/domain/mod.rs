//! Domain layer - Notes, embeds and their inline encoding

pub mod embed;
pub mod mime;
pub mod note;
pub mod replace;

pub use embed::{find_embeds, inline_markup, EmbedReference};
pub use mime::{data_uri, mime_type_for_extension};
pub use note::{Note, VaultFile};
pub use replace::{apply_replacements, Replacement};
