//! Noughts library - two-player tic-tac-toe with persisted state.
//!
//! # Architecture
//!
//! - **Game**: board representation, move legality, and win/draw
//!   detection; turn and result are derived from the board on every
//!   read, never stored.
//! - **Scoreboard**: win/draw counters bumped exactly once per
//!   concluded game, persisted through the key-value store.
//! - **ThemePreference**: persisted light/dark toggle.
//! - **GameController**: mediates the three UI intents (play move,
//!   reset, toggle theme) into state transitions.
//! - **Store**: injected key-value persistence with file-backed and
//!   in-memory implementations.
//! - **Tui**: ratatui front end owning rendering and keyboard focus.
//!
//! # Example
//!
//! ```
//! use noughts::store::MemoryStore;
//! use noughts::{GameController, GameResult, Player};
//! use std::sync::Arc;
//!
//! let mut controller = GameController::new(Arc::new(MemoryStore::new()));
//! for index in [0, 4, 1, 3, 2] {
//!     controller.play_move(index);
//! }
//! assert_eq!(controller.result().winner(), Some(Player::X));
//! assert_eq!(controller.scores().x_wins, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod controller;
mod game;
mod score;
mod theme;

// Public module declarations
pub mod cli;
pub mod store;
pub mod tui;

// Crate-level exports - game engine
pub use game::{Board, Game, GameResult, MoveError, Player, Square, rules};

// Crate-level exports - score tracking
pub use score::{SCORE_KEY, ScoreRecord, Scoreboard};

// Crate-level exports - theme preference
pub use theme::{THEME_KEY, Theme, ThemePreference};

// Crate-level exports - controller
pub use controller::GameController;
