//! Infrastructure layer - External I/O and persistence

pub mod export;
#[cfg(test)]
pub mod memory;
pub mod settings;
pub mod vault;

pub use export::ExportSink;
pub use settings::Settings;
pub use vault::{FileSystemVault, Vault};
