//! Keyboard mapping.

use crossterm::event::KeyCode;
use strictly_connect_four::WIDTH;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the column cursor one step left.
    CursorLeft,
    /// Move the column cursor one step right.
    CursorRight,
    /// Drop a piece in the cursor column.
    Drop,
    /// Drop a piece in the given column.
    DropAt(usize),
    /// Take back the last move.
    Undo,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, if it has one.
///
/// Digits `1`-`7` name columns directly.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::CursorRight),
        KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => Some(Action::Drop),
        KeyCode::Char('u') => Some(Action::Undo),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|digit| digit as usize)
            .filter(|digit| (1..=WIDTH).contains(digit))
            .map(|digit| Action::DropAt(digit - 1)),
        _ => None,
    }
}

/// Moves the column cursor, clamping at the board edges.
pub fn move_cursor(cursor: usize, action: Action) -> usize {
    match action {
        Action::CursorLeft => cursor.saturating_sub(1),
        Action::CursorRight => (cursor + 1).min(WIDTH - 1),
        _ => cursor,
    }
}
