//! Tests for scripted play and the serialized game view.

use rewind::{Action, EngineError, GameView, Player, play};

fn actions(list: &[&str]) -> Vec<Action> {
    list.iter().map(|s| s.parse().expect("valid action")).collect()
}

#[test]
fn test_win_then_ignored_move() {
    let view = play(&actions(&["0", "4", "1", "5", "2", "3"]), true).unwrap();
    assert_eq!(view.status, "Winner: X");
    assert_eq!(view.winner, Some(Player::X));
    assert_eq!(view.winning_line, Some([0, 1, 2]));
    assert_eq!(view.step, 5);
    assert_eq!(view.moves.len(), 6);
    assert_eq!(view.board[3], None);
}

#[test]
fn test_rewind_and_branch() {
    let view = play(&actions(&["0", "4", "1", "5", "2", "jump:0", "8"]), true).unwrap();
    assert_eq!(view.step, 1);
    assert_eq!(view.moves.len(), 2);
    assert_eq!(view.last_move, Some(8));
    let marks: Vec<_> = view.board.iter().flatten().collect();
    assert_eq!(marks, vec![&Player::X]);
    assert_eq!(view.board[8], Some(Player::X));
    assert_eq!(view.to_move, Player::O);
}

#[test]
fn test_sort_flag_reverses_rows() {
    let view = play(&actions(&["4", "0", "toggle"]), true).unwrap();
    let steps: Vec<_> = view.moves.iter().map(|m| m.step).collect();
    assert_eq!(steps, vec![2, 1, 0]);
    assert_eq!(view.sort_order, "ascending");
    assert!(view.moves[0].current);

    let view = play(&actions(&["4", "0"]), false).unwrap();
    assert_eq!(view.moves.last().map(|m| m.text.as_str()), Some("Game start"));
}

#[test]
fn test_out_of_range_jump_fails() {
    let err = play(&actions(&["4", "jump:2"]), true).unwrap_err();
    assert_eq!(err, EngineError::InvalidStep { step: 2, len: 2 });
}

#[test]
fn test_view_json_round_trip() {
    let view = play(&actions(&["4", "0", "jump:1"]), true).unwrap();
    let json = serde_json::to_string(&view).unwrap();
    let parsed: GameView = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, view);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "Next player: O");
    assert_eq!(value["moves"][1]["text"], "Move #1 (O in position 4)");
    assert_eq!(value["moves"][1]["current"], true);
}
