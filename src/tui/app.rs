//! Application state and the event loop.

use super::ui;
use crate::controller::GameController;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Stdout;
use std::time::Duration;
use tracing::{debug, instrument};

/// Main application state: the controller plus the cell cursor.
#[derive(Debug, Getters)]
pub struct App {
    controller: GameController,
    cursor: usize,
}

impl App {
    /// Creates a new application with the cursor on the center square.
    #[instrument(skip(controller))]
    pub fn new(controller: GameController) -> Self {
        Self {
            controller,
            cursor: 4,
        }
    }

    /// Runs the event loop until the user quits.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, self))?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                if self.handle_key(key) {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handles a key event. Returns true when the app should quit.
    #[instrument(skip(self))]
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, 2),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(2, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => {
                debug!(cursor = self.cursor, "Placing mark");
                self.controller.play_move(self.cursor);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.controller.reset(),
            KeyCode::Char('t') | KeyCode::Char('T') => self.controller.toggle_theme(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        }
        false
    }

    /// Moves the cursor by the given row/column deltas, wrapping within
    /// the grid.
    fn move_cursor(&mut self, row_delta: usize, col_delta: usize) {
        let row = (self.cursor / 3 + row_delta) % 3;
        let col = (self.cursor % 3 + col_delta) % 3;
        self.cursor = row * 3 + col;
    }
}
