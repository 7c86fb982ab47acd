//! Tests for exactly-once score recording and its persistence.

use noughts::store::{KeyValueStore, MemoryStore, StoreError};
use noughts::{GameResult, Player, SCORE_KEY, ScoreRecord, Scoreboard};
use std::sync::Arc;

fn won_by(winner: Player) -> GameResult {
    GameResult::Won {
        winner,
        line: [0, 1, 2],
    }
}

/// Store whose writes always fail, for exercising the swallow path.
#[derive(Debug, Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::new("Write rejected"))
    }
}

#[test]
fn test_starts_from_zero_on_empty_store() {
    let scoreboard = Scoreboard::load(Arc::new(MemoryStore::new()));
    assert_eq!(scoreboard.record(), ScoreRecord::default());
}

#[test]
fn test_records_win_once() {
    let mut scoreboard = Scoreboard::load(Arc::new(MemoryStore::new()));

    scoreboard.observe(won_by(Player::X));
    assert_eq!(scoreboard.record().x_wins, 1);

    // Re-reading a concluded state must not count it again.
    for _ in 0..5 {
        scoreboard.observe(won_by(Player::X));
    }
    assert_eq!(scoreboard.record().x_wins, 1);
    assert_eq!(scoreboard.record().o_wins, 0);
    assert_eq!(scoreboard.record().draws, 0);
}

#[test]
fn test_records_each_outcome_kind() {
    let mut scoreboard = Scoreboard::load(Arc::new(MemoryStore::new()));

    scoreboard.observe(won_by(Player::X));
    scoreboard.rearm();
    scoreboard.observe(won_by(Player::O));
    scoreboard.rearm();
    scoreboard.observe(GameResult::Draw);

    let record = scoreboard.record();
    assert_eq!((record.x_wins, record.o_wins, record.draws), (1, 1, 1));
}

#[test]
fn test_in_progress_never_recorded() {
    let mut scoreboard = Scoreboard::load(Arc::new(MemoryStore::new()));

    scoreboard.observe(GameResult::InProgress);
    scoreboard.observe(GameResult::InProgress);
    assert_eq!(scoreboard.record(), ScoreRecord::default());
}

#[test]
fn test_rearm_allows_next_game_to_count() {
    let mut scoreboard = Scoreboard::load(Arc::new(MemoryStore::new()));

    scoreboard.observe(won_by(Player::X));
    scoreboard.rearm();
    scoreboard.observe(won_by(Player::X));

    // Two completed games, two increments.
    assert_eq!(scoreboard.record().x_wins, 2);
}

#[test]
fn test_persists_camel_case_json() {
    let store = Arc::new(MemoryStore::new());
    let mut scoreboard = Scoreboard::load(store.clone());

    scoreboard.observe(GameResult::Draw);

    let raw = store.get(SCORE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["xWins"], 0);
    assert_eq!(value["oWins"], 0);
    assert_eq!(value["draws"], 1);
}

#[test]
fn test_reloads_persisted_record() {
    let store = Arc::new(MemoryStore::new());
    {
        let mut scoreboard = Scoreboard::load(store.clone());
        scoreboard.observe(won_by(Player::O));
    }

    let scoreboard = Scoreboard::load(store);
    assert_eq!(scoreboard.record().o_wins, 1);
}

#[test]
fn test_malformed_record_falls_back_to_zero() {
    let store = Arc::new(MemoryStore::new());
    store.set(SCORE_KEY, "not json").unwrap();

    let scoreboard = Scoreboard::load(store);
    assert_eq!(scoreboard.record(), ScoreRecord::default());
}

#[test]
fn test_write_failure_keeps_memory_authoritative() {
    let mut scoreboard = Scoreboard::load(Arc::new(ReadOnlyStore::default()));

    scoreboard.observe(won_by(Player::X));
    assert_eq!(scoreboard.record().x_wins, 1);

    scoreboard.rearm();
    scoreboard.observe(GameResult::Draw);
    assert_eq!(scoreboard.record().draws, 1);
}
