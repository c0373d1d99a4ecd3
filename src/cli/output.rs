//! Output formatting utilities

use crate::infrastructure::Settings;

/// Format all settings for display, one `key = value` per line
pub fn format_settings(settings: &Settings) -> String {
    format!("export-path = {}\n", settings.export_path)
}
