//! Key mapping for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Direction, Position};

/// Maps arrow keys to a cursor direction.
pub fn direction_for(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Maps digit keys `1`-`9` to board cells 0-8.
pub fn cell_for_digit(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1)),
        _ => None,
    }
}
