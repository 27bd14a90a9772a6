//! # Actions
//!
//! Everything that can happen in the countdown becomes an `Action`.
//! User presses Up? That's `Action::Increase`.
//! The ticker fires? That's `Action::Tick(now)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This is also where the date selector's `Updated` event is wired up: the
//! new target is copied into the countdown and handed back as
//! `Effect::SaveDate` for persistence.

use chrono::NaiveDateTime;
use log::{debug, error};

use crate::core::error::CalendarError;
use crate::core::selector::SelectorEvent;
use crate::core::state::{App, target_status};
use crate::core::target::TargetDate;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectLeft,
    SelectRight,
    Increase,
    Decrease,
    /// Periodic recomputation against the given wall-clock reading.
    Tick(NaiveDateTime),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Redraw,
    /// Persist the date, then redraw.
    SaveDate(TargetDate),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    if !matches!(action, Action::Tick(_)) {
        debug!("update: {:?}", action);
    }
    match action {
        Action::SelectLeft => {
            app.selector.select_left();
            Effect::Redraw
        }
        Action::SelectRight => {
            app.selector.select_right();
            Effect::Redraw
        }
        Action::Increase => {
            let result = app.selector.increase();
            on_edit(app, result)
        }
        Action::Decrease => {
            let result = app.selector.decrease();
            on_edit(app, result)
        }
        Action::Tick(now) => {
            let changed = app.countdown.tick(now);
            let expired = app.countdown.is_expired(now);
            if changed || expired != app.expired {
                app.expired = expired;
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::Quit => Effect::Quit,
    }
}

fn on_edit(app: &mut App, result: Result<SelectorEvent, CalendarError>) -> Effect {
    let retarget = result.and_then(|SelectorEvent::Updated| {
        let date = app.selector.target_date();
        let target = date.to_datetime()?;
        Ok((date, target))
    });
    match retarget {
        Ok((date, target)) => {
            app.countdown.set_target(target);
            app.status_message = target_status(&date);
            Effect::SaveDate(date)
        }
        Err(e) => {
            error!("Date edit failed: {}", e);
            app.error = Some(e.to_string());
            Effect::Quit
        }
    }
}
