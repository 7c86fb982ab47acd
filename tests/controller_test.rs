//! Tests driving the controller through full game flows.

use noughts::store::{KeyValueStore, MemoryStore};
use noughts::{GameController, GameResult, Player, SCORE_KEY, THEME_KEY, Square, Theme};
use std::sync::Arc;

fn controller() -> GameController {
    GameController::new(Arc::new(MemoryStore::new()))
}

#[test]
fn test_win_increments_score_once() {
    let mut controller = controller();
    for index in [0, 4, 1, 3, 2] {
        controller.play_move(index);
    }

    assert_eq!(controller.result().winner(), Some(Player::X));
    assert_eq!(controller.scores().x_wins, 1);

    // Further intents on the concluded game change nothing.
    controller.play_move(8);
    controller.play_move(8);
    assert_eq!(controller.scores().x_wins, 1);
    assert!(controller.board().is_empty(8));
}

#[test]
fn test_draw_increments_draws() {
    let mut controller = controller();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        controller.play_move(index);
    }

    assert_eq!(controller.result(), GameResult::Draw);
    assert_eq!(controller.scores().draws, 1);
}

#[test]
fn test_illegal_moves_are_silent_no_ops() {
    let mut controller = controller();
    controller.play_move(4);

    // Occupied and out-of-range intents leave everything unchanged.
    controller.play_move(4);
    controller.play_move(99);

    assert_eq!(controller.to_move(), Player::O);
    assert_eq!(
        controller
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count(),
        1
    );
}

#[test]
fn test_reset_preserves_scores_and_counts_next_game() {
    let mut controller = controller();
    for index in [0, 4, 1, 3, 2] {
        controller.play_move(index);
    }
    assert_eq!(controller.scores().x_wins, 1);

    controller.reset();
    assert_eq!(controller.result(), GameResult::InProgress);
    assert_eq!(controller.to_move(), Player::X);
    assert_eq!(controller.scores().x_wins, 1);

    // An identical second game increments again.
    for index in [0, 4, 1, 3, 2] {
        controller.play_move(index);
    }
    assert_eq!(controller.scores().x_wins, 2);
}

#[test]
fn test_toggle_theme_round_trip() {
    let mut controller = controller();
    assert_eq!(controller.theme(), Theme::Light);

    controller.toggle_theme();
    assert_eq!(controller.theme(), Theme::Dark);

    controller.toggle_theme();
    assert_eq!(controller.theme(), Theme::Light);
}

#[test]
fn test_state_survives_through_store() {
    let store = Arc::new(MemoryStore::new());

    {
        let mut controller = GameController::new(store.clone());
        controller.toggle_theme();
        for index in [0, 4, 1, 3, 2] {
            controller.play_move(index);
        }
    }

    // A fresh controller on the same store sees the persisted state;
    // the board itself starts fresh.
    let controller = GameController::new(store.clone());
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(controller.scores().x_wins, 1);
    assert_eq!(controller.result(), GameResult::InProgress);

    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert!(store.get(SCORE_KEY).unwrap().is_some());
}
