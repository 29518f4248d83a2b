//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`types::Command`] and reads at most one
//! command per tick without ever blocking. The game core never sees raw keys.

pub mod map;
pub mod poll;

pub use tty_tetris_types as types;

pub use map::{command_for_key, is_quit_key};
pub use poll::{poll_command, EventSource, TerminalEvents};
