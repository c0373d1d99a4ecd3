//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flatnote")]
#[command(about = "Inline embedded images into markdown notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new vault
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Export file with pictures
    #[command(alias = "export-current-note")]
    Export {
        /// Note to export (relative to the current directory or vault root)
        note: Option<PathBuf>,
    },

    /// Flatten embedded images
    #[command(alias = "flatten-current-note")]
    Flatten {
        /// Note to rewrite in place
        note: Option<PathBuf>,
    },

    /// View or modify settings
    Config {
        /// Setting key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all settings
        #[arg(short, long)]
        list: bool,
    },
}
