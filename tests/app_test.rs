//! Tests for key-driven play through the TUI application state.

use crossterm::event::KeyCode;
use rewind::{App, Flow, Focus, GameEngine, Player, Position, Status};

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        assert_eq!(app.handle_key(*key), Flow::Continue);
    }
}

fn digits(s: &str) -> Vec<KeyCode> {
    s.chars().map(KeyCode::Char).collect()
}

#[test]
fn test_play_to_win_with_digits() {
    let mut app = App::new(GameEngine::new());
    // Cells 0, 4, 1, 5, 2 are keys 1, 5, 2, 6, 3.
    press(&mut app, &digits("15263"));
    assert_eq!(app.engine().display_status(), Status::Winner(Player::X));

    press(&mut app, &digits("4"));
    assert_eq!(app.engine().len(), 6, "won board ignores moves");
}

#[test]
fn test_time_travel_from_history_pane() {
    let mut app = App::new(GameEngine::new());
    press(&mut app, &digits("15263"));

    press(&mut app, &[KeyCode::Tab]);
    assert_eq!(app.focus(), Focus::History);
    for _ in 0..5 {
        press(&mut app, &[KeyCode::Up]);
    }
    press(&mut app, &[KeyCode::Enter, KeyCode::Tab]);
    assert_eq!(app.engine().step(), 0);
    assert_eq!(app.focus(), Focus::Board);

    press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Char(' ')]);
    assert_eq!(app.cursor(), Position::BottomRight);
    assert_eq!(app.engine().len(), 2);
    assert_eq!(app.engine().step(), 1);
    assert_eq!(app.selected_step(), 1);
}

#[test]
fn test_sort_key_flips_display_only() {
    let mut app = App::new(GameEngine::new());
    press(&mut app, &digits("5s"));
    assert!(!app.engine().is_sort_descending());
    assert_eq!(app.engine().sort_label(), "ascending");
    assert_eq!(app.engine().len(), 2);

    press(&mut app, &digits("s"));
    assert!(app.engine().is_sort_descending());
}
