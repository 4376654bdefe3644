//! Rolodex - main entry point.
//!
//! Wires the pieces together: stderr logging, configuration, optional
//! book load/save, and the REPL over stdin/stdout.

use anyhow::Result;
use rolodex::{repl, storage, AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging goes to stderr only; stdout belongs to the REPL.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut book = match &config.book_path {
        Some(path) => {
            let book = storage::load(path).inspect_err(|e| {
                error!("Failed to load address book: {}", e);
            })?;
            info!(records = book.len(), "address book loaded");
            book
        }
        None => AddressBook::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut book, stdin.lock(), stdout.lock())?;

    if let Some(path) = &config.book_path {
        storage::save(&book, path).inspect_err(|e| {
            error!("Failed to save address book: {}", e);
        })?;
    }

    Ok(())
}
