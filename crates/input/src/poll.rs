//! Non-blocking, one-command-per-tick input polling.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::command_for_key;
use crate::types::Command;

/// A queue of terminal events that can be checked without blocking.
pub trait EventSource {
    /// Whether an event is ready to be read right now.
    fn poll_ready(&mut self) -> io::Result<bool>;

    /// Read the next event. Only called after `poll_ready` returned true.
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, read through crossterm with a zero timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_ready(&mut self) -> io::Result<bool> {
        event::poll(Duration::ZERO)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Read pending events until one decodes into a command.
///
/// Returns the first decoded command; anything queued behind it is left for
/// the next tick. Releases, unmapped keys and non-key events (resize, focus,
/// paste) are consumed along the way. An empty queue yields `Ok(None)`.
pub fn poll_command(source: &mut impl EventSource) -> io::Result<Option<Command>> {
    while source.poll_ready()? {
        let Event::Key(key) = source.read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if let Some(command) = command_for_key(key) {
            return Ok(Some(command));
        }
    }
    Ok(None)
}
