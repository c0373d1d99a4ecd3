//! flatnote - Inline embedded images into markdown notes
//!
//! Replaces `![[image.png]]` embeds in a note with base64 data URIs, either
//! exporting a standalone copy or rewriting the note in place.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FlatnoteError;
