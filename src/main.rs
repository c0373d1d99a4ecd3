use clap::Parser;
use flatnote::application::{init::init, ConfigService, ExportNoteService, FlattenNoteService};
use flatnote::application::manage_config::VALID_KEYS;
use flatnote::cli::{format_settings, Cli, Commands};
use flatnote::domain::Note;
use flatnote::error::FlatnoteError;
use flatnote::infrastructure::FileSystemVault;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), FlatnoteError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Export { note }) => {
            let vault = FileSystemVault::discover()?;
            let note = resolve_note(&vault, note.as_deref())?;
            let service = ExportNoteService::new(vault);
            service.execute(note.as_ref())?;
            Ok(())
        }
        Some(Commands::Flatten { note }) => {
            let vault = FileSystemVault::discover()?;
            let note = resolve_note(&vault, note.as_deref())?;
            let service = FlattenNoteService::new(vault);
            service.execute(note.as_ref())?;
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let vault = FileSystemVault::discover()?;
            let service = ConfigService::new(vault);

            if list {
                print!("{}", format_settings(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: flatnote config [--list | <key> [<value>]]");
                println!("Valid keys: {}", VALID_KEYS);
                Ok(())
            }
        }
        None => {
            println!("flatnote - Inline embedded images into markdown notes");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// The active note is the one named on the command line, if any
fn resolve_note(vault: &FileSystemVault, arg: Option<&Path>) -> Result<Option<Note>, FlatnoteError> {
    match arg {
        Some(path) => {
            let cwd = std::env::current_dir()?;
            vault.resolve_note(&cwd, path).map(Some)
        }
        None => Ok(None),
    }
}
