//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game command.
///
/// Arrow keys plus the usual WASD and vim letters steer the piece; Space
/// restarts after game over; Esc, `q` and Ctrl-C quit.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if is_quit_key(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(Command::Rotate),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(Command::SoftDrop),
        KeyCode::Char(' ') => Some(Command::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
