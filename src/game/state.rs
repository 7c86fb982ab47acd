//! The playable round: move application and reset.

use super::rules;
use super::types::{Board, GameResult, Player, Square};
use tracing::instrument;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not address a square on the board.
    #[display("Square {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A round of tic-tac-toe.
///
/// `Game` owns only the board. The side to move and the result are
/// derived from the squares on every read, so neither can go stale
/// or drift out of sync with the marks actually placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.board.to_move()
    }

    /// Evaluates the current result.
    pub fn result(&self) -> GameResult {
        rules::evaluate(&self.board)
    }

    /// Places the current player's mark at the given square.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the board untouched, when the game has
    /// concluded, the index is out of range, or the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        if self.result().is_over() {
            return Err(MoveError::GameOver);
        }

        match self.board.get(index) {
            None => return Err(MoveError::OutOfBounds(index)),
            Some(Square::Occupied(_)) => return Err(MoveError::SquareOccupied(index)),
            Some(Square::Empty) => {}
        }

        let mark = self.board.to_move();
        self.board.set(index, Square::Occupied(mark))
    }

    /// Replaces the board with a fresh one: 9 empty squares, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
