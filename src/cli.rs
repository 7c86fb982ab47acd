//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe for the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe with persisted scores and themes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the data file holding scores and the theme choice
    /// (created if it doesn't exist)
    #[arg(long, default_value = "noughts.json")]
    pub data_file: PathBuf,

    /// Keep scores and theme in memory only; nothing is written to disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Path to the log file
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}
