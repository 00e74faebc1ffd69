//! Key mapping from terminal events to cursor commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key asks the drag cursor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Move the cursor one tile left
    Left,
    /// Move the cursor one tile right
    Right,
    /// Select the previous word
    Up,
    /// Select the next word
    Down,
    /// Pick up the tile under the cursor, or drop the held tile here
    GrabOrDrop,
    /// Put the held tile back without moving it
    Cancel,
    /// Ask for a new set of words
    NewSet,
}

/// Map keyboard input to cursor commands.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputCommand::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputCommand::Right)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputCommand::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputCommand::Down)
        }

        KeyCode::Char(' ') | KeyCode::Enter => Some(InputCommand::GrabOrDrop),
        KeyCode::Esc => Some(InputCommand::Cancel),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputCommand::NewSet),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
