//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! A single thread serializes everything: the [`Ticker`] decides how long the
//! loop may block on input, ticks feed `Action::Tick(now)` to the reducer, and
//! key presses feed the selector actions. No two handlers ever run at once.
//!
//! ## Redraw Strategy
//!
//! Frames are only drawn when something changed: the countdown text moved on,
//! the cursor or a field changed, or the terminal was resized. At the default
//! 60 Hz tick that means roughly one draw per second while idle.

mod component;
mod components;
mod event;
mod ui;

use log::{error, info};
use std::io::{self, stdout};
use std::time::Instant;

use chrono::Local;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::date_store;
use crate::core::state::App;
use crate::core::ticker::Ticker;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Maps a selector key to its core action. Resize has no core counterpart.
fn action_for(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::SelectLeft => Some(Action::SelectLeft),
        TuiEvent::SelectRight => Some(Action::SelectRight),
        TuiEvent::Increase => Some(Action::Increase),
        TuiEvent::Decrease => Some(Action::Decrease),
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
    }
}

pub fn run(app: App, config: &ResolvedConfig) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| run_loop(&mut terminal, app, config));
    ratatui::restore();
    result
}

fn run_loop(terminal: &mut DefaultTerminal, mut app: App, config: &ResolvedConfig) -> io::Result<()> {
    let mut ticker = Ticker::from_rate(config.tick_rate_hz, Instant::now());
    let mut needs_redraw = true; // Force first frame

    loop {
        if ticker.poll(Instant::now()) {
            let now = Local::now().naive_local();
            if update(&mut app, Action::Tick(now)) == Effect::Redraw {
                needs_redraw = true;
            }
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app))?;
            needs_redraw = false;
        }

        // Block until input arrives or the next tick is due
        let first_event = poll_event_timeout(ticker.timeout(Instant::now()))?;

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut pending = first_event;
        while let Some(event) = pending.take() {
            needs_redraw = true;
            if let Some(action) = action_for(event) {
                match update(&mut app, action) {
                    Effect::Quit => should_quit = true,
                    Effect::SaveDate(date) => {
                        if let Err(e) = date_store::save_date(&config.date_path, &date) {
                            error!("Failed to save date to {}: {}", config.date_path.display(), e);
                            return Err(e);
                        }
                        info!("Target changed to {}", date);
                    }
                    Effect::Redraw | Effect::None => {}
                }
            }
            if should_quit {
                break;
            }
            pending = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }
    }

    if let Some(msg) = app.error.take() {
        return Err(io::Error::other(msg));
    }
    info!("Countdown exiting");
    Ok(())
}
