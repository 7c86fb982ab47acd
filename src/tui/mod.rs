//! Terminal UI: rendering and input for the game.
//!
//! Owns focus movement and key handling; game legality lives in the
//! controller and below.

mod app;
mod ui;

pub use app::App;

use crate::controller::GameController;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Runs the TUI until the user quits, restoring the terminal on exit.
pub fn run(controller: GameController) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI stopped");
    res
}
