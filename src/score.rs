//! Persisted win/draw counters.
//!
//! The scoreboard counts each concluded game exactly once. The result
//! itself is level-triggered (every render re-derives it from the
//! board), so recording goes through an explicit state machine instead
//! of reacting to "game over is true": a conclusion is recorded on the
//! transition into it, and only a reset re-arms the machine.

use crate::game::{GameResult, Player};
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Store key for the persisted score record.
pub const SCORE_KEY: &str = "scores";

/// Win and draw counters, persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreRecord {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

/// Recording state for the current game.
///
/// Transitions: `Active` -> `Unrecorded` when a concluded result is
/// first observed, `Unrecorded` -> `Recorded` once the counter is
/// bumped and persisted, and any state -> `Active` on [`Scoreboard::rearm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordingPhase {
    /// The current game has not concluded.
    Active,
    /// The game concluded but the counter has not been bumped yet.
    Unrecorded,
    /// This game's conclusion is already counted.
    Recorded,
}

/// Tracks scores across games and persists them through the store.
#[derive(Debug)]
pub struct Scoreboard {
    record: ScoreRecord,
    phase: RecordingPhase,
    store: Arc<dyn KeyValueStore>,
}

impl Scoreboard {
    /// Loads the scoreboard from the store.
    ///
    /// An absent, unreadable, or malformed record falls back to zeros.
    #[instrument(skip(store))]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let record = match store.get(SCORE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(record) => record,
                Err(err) => {
                    warn!(%err, "Malformed score record, starting from zero");
                    ScoreRecord::default()
                }
            },
            Ok(None) => ScoreRecord::default(),
            Err(err) => {
                warn!(%err, "Failed to read score record, starting from zero");
                ScoreRecord::default()
            }
        };

        debug!(?record, "Scoreboard loaded");
        Self {
            record,
            phase: RecordingPhase::Active,
            store,
        }
    }

    /// Returns the current counters.
    pub fn record(&self) -> ScoreRecord {
        self.record
    }

    /// Observes the current game result.
    ///
    /// Safe to call on every state read: the counter for a concluded
    /// game is bumped exactly once, on the first observation of the
    /// conclusion. Later observations of the same conclusion are no-ops.
    #[instrument(skip(self))]
    pub fn observe(&mut self, result: GameResult) {
        if self.phase == RecordingPhase::Active && result.is_over() {
            self.phase = RecordingPhase::Unrecorded;
        }

        if self.phase == RecordingPhase::Unrecorded {
            match result {
                GameResult::Won { winner: Player::X, .. } => self.record.x_wins += 1,
                GameResult::Won { winner: Player::O, .. } => self.record.o_wins += 1,
                GameResult::Draw => self.record.draws += 1,
                GameResult::InProgress => return,
            }
            self.phase = RecordingPhase::Recorded;
            info!(?result, record = ?self.record, "Game recorded");
            self.persist();
        }
    }

    /// Re-arms recording for a fresh game.
    ///
    /// Called on reset and nowhere else; the next conclusion of the new
    /// game is recorded again.
    #[instrument(skip(self))]
    pub fn rearm(&mut self) {
        self.phase = RecordingPhase::Active;
    }

    /// Writes the record to the store.
    ///
    /// Persistence failure is swallowed: the in-memory record stays
    /// authoritative for the session.
    fn persist(&self) {
        match serde_json::to_string(&self.record) {
            Ok(raw) => {
                if let Err(err) = self.store.set(SCORE_KEY, &raw) {
                    warn!(%err, "Failed to persist scores");
                }
            }
            Err(err) => warn!(%err, "Failed to serialize scores"),
        }
    }
}
