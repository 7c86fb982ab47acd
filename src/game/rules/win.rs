//! Win detection logic.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// The 8 lines that win the game: 3 rows, 3 columns, 2 diagonals.
///
/// Scan order is fixed; the first completed line found is the one
/// reported, which keeps evaluation deterministic even on boards
/// with more than one completed line.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the completed line,
/// or `None` if no line is complete.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, [usize; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Some(Square::Occupied(player)) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}
