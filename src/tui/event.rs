use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Date selector actions (passed to core::update)
    SelectLeft,
    SelectRight,
    Increase,
    Decrease,
    Quit,
    ForceQuit, // Ctrl+C

    // TUI-local events (handled directly in TUI)
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Arrow keys, vi keys (h/j/k/l) and WASD all drive the date selector.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Terminals with keyboard enhancement also report releases
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Left | KeyCode::Char('h' | 'a')) => Some(TuiEvent::SelectLeft),
        (_, KeyCode::Right | KeyCode::Char('l' | 'd')) => Some(TuiEvent::SelectRight),
        (_, KeyCode::Up | KeyCode::Char('k' | 'w')) => Some(TuiEvent::Increase),
        (_, KeyCode::Down | KeyCode::Char('j' | 's')) => Some(TuiEvent::Decrease),
        (_, KeyCode::Char('q') | KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}
