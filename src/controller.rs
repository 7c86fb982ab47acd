//! Controller mediating UI intents into state transitions.

use crate::game::{Board, Game, GameResult, Player};
use crate::score::{ScoreRecord, Scoreboard};
use crate::store::KeyValueStore;
use crate::theme::{Theme, ThemePreference};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Composes the game, scoreboard, and theme preference.
///
/// The front end calls exactly three mutating intents ([`play_move`],
/// [`reset`], and [`toggle_theme`]) and reads everything else through
/// the accessor surface. Game legality lives entirely below this layer.
///
/// [`play_move`]: GameController::play_move
/// [`reset`]: GameController::reset
/// [`toggle_theme`]: GameController::toggle_theme
#[derive(Debug)]
pub struct GameController {
    game: Game,
    scoreboard: Scoreboard,
    theme: ThemePreference,
}

impl GameController {
    /// Creates a controller backed by the given store.
    #[instrument(skip(store))]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        info!("Creating GameController");
        Self {
            game: Game::new(),
            scoreboard: Scoreboard::load(store.clone()),
            theme: ThemePreference::load(store),
        }
    }

    /// Plays the current player's mark at the given square.
    ///
    /// An illegal move (occupied square, out of range, game concluded)
    /// is rejected silently: logged at debug level, no state change, no
    /// user-facing error.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, index: usize) {
        if let Err(err) = self.game.play(index) {
            debug!(%err, index, "Move rejected");
            return;
        }

        self.scoreboard.observe(self.game.result());
    }

    /// Starts a fresh game and re-arms score recording.
    ///
    /// Scores and theme survive the reset.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.scoreboard.rearm();
        info!("Board reset");
    }

    /// Swaps the theme between light and dark.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        info!(%theme, "Theme toggled");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.game.to_move()
    }

    /// Returns the current result, re-derived from the board.
    pub fn result(&self) -> GameResult {
        self.game.result()
    }

    /// Returns the score counters.
    pub fn scores(&self) -> ScoreRecord {
        self.scoreboard.record()
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }
}
