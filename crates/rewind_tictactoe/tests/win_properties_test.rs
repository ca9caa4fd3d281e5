//! Property tests for win detection and turn order.

use proptest::prelude::*;
use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{Board, GameEngine, Player, Position, Square, check_winner, mover_at};

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_square()).prop_map(Board::from_squares)
}

/// Reference answer: scan lines in order, first uniform non-empty line wins.
fn first_complete_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.iter().find_map(|line| {
        let owners: Vec<_> = line.iter().map(|p| board.get(*p).player()).collect();
        match owners.as_slice() {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some((*a, *line)),
            _ => None,
        }
    })
}

proptest! {
    #[test]
    fn completed_line_is_reported(
        board in arb_board(),
        line_index in 0usize..8,
        player in arb_player(),
    ) {
        let mut board = board;
        for pos in LINES[line_index] {
            board.set(pos, Square::Occupied(player));
        }

        let win = check_winner(&board).expect("a line was just completed");
        let (expected_player, expected_line) =
            first_complete_line(&board).expect("reference finds the line too");
        prop_assert_eq!(win.player, expected_player);
        prop_assert_eq!(win.line, expected_line);

        // The reported line can only come earlier in scan order than the forced one.
        let forced = LINES.iter().position(|l| *l == win.line).unwrap();
        prop_assert!(forced <= line_index);
    }

    #[test]
    fn detector_matches_reference(board in arb_board()) {
        let actual = check_winner(&board).map(|w| (w.player, w.line));
        prop_assert_eq!(actual, first_complete_line(&board));
    }

    #[test]
    fn random_play_keeps_parity_and_truncates(
        cells in proptest::collection::vec(0usize..9, 0..30),
        jumps in proptest::collection::vec(any::<prop::sample::Index>(), 0..5),
    ) {
        let mut engine = GameEngine::new();
        let mut jumps = jumps.into_iter();

        for (i, cell) in cells.into_iter().enumerate() {
            if i % 4 == 3 && let Some(idx) = jumps.next() {
                let target = idx.index(engine.len());
                engine.jump_to(target).unwrap();
                prop_assert_eq!(engine.step(), target);
            }

            let before_len = engine.len();
            let before_step = engine.step();
            let mover = engine.to_move();
            prop_assert_eq!(mover, mover_at(engine.step()));
            prop_assert_eq!(mover == Player::X, engine.step() % 2 == 0);

            let pos = Position::from_index(cell).unwrap();
            if engine.attempt_move(pos).is_applied() {
                prop_assert_eq!(engine.len(), before_step + 2);
                prop_assert_eq!(engine.step(), before_step + 1);
                prop_assert_eq!(engine.board().get(pos), Square::Occupied(mover));
            } else {
                prop_assert_eq!(engine.len(), before_len);
                prop_assert_eq!(engine.step(), before_step);
            }

            prop_assert_eq!(engine.board().occupied_count(), engine.step());
            prop_assert!(engine.history()[0].board().is_clear());
        }
    }
}

#[test]
fn empty_board_has_no_winner() {
    assert_eq!(check_winner(&Board::new()), None);
}
