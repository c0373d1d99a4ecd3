//! Application layer - Use cases and orchestration

pub mod export_note;
pub mod flatten_note;
pub mod init;
pub mod inline_images;
pub mod manage_config;

pub use export_note::ExportNoteService;
pub use flatten_note::FlattenNoteService;
pub use inline_images::{inline_images, inline_text, InlineOutcome};
pub use manage_config::ConfigService;
