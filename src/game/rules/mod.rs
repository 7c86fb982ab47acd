//! Game rules.
//!
//! This module contains pure functions for evaluating a board.
//! Rules are separated from board storage so the result is always
//! a read-time projection of the squares, never cached state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, GameResult};
use tracing::instrument;

/// Evaluates a board for a result.
///
/// Scans the 8 fixed lines in order and returns the first completed
/// one as a win; a full board with no winner is a draw; anything else
/// is still in progress. Pure and deterministic.
#[instrument]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some((winner, line)) = check_winner(board) {
        return GameResult::Won { winner, line };
    }

    if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
