//! Noughts - two-player tic-tac-toe for the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::cli::Cli;
use noughts::store::{FileStore, KeyValueStore, MemoryStore};
use noughts::{GameController, tui};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output doesn't fight the TUI for the
    // terminal.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting noughts");

    let store: Arc<dyn KeyValueStore> = if cli.ephemeral {
        info!("Running ephemeral, nothing will be persisted");
        Arc::new(MemoryStore::new())
    } else {
        info!(path = %cli.data_file.display(), "Opening data file");
        Arc::new(FileStore::open(&cli.data_file))
    };

    let controller = GameController::new(store);
    tui::run(controller)
}
