//! Terminal event handling.
//!
//! Captures keyboard and resize events from the terminal and turns the
//! absence of input into periodic ticks so the loop can pick up refresh
//! outcomes.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// A periodic tick for UI refresh.
    Tick,
}

/// Waits up to `tick_rate` for the next terminal event.
///
/// Key releases and repeats are folded into [`TerminalEvent::Tick`].
///
/// # Errors
///
/// Returns an error if reading from the terminal fails.
pub fn next(tick_rate: Duration) -> io::Result<TerminalEvent> {
    if !event::poll(tick_rate)? {
        return Ok(TerminalEvent::Tick);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => TerminalEvent::Key(key),
        Event::Resize(cols, rows) => TerminalEvent::Resize(cols, rows),
        _ => TerminalEvent::Tick,
    })
}
