//! # Countdown Timer
//!
//! Holds the target instant and the last rendered `HH:MM:SS` string. Each
//! tick recomputes `target - now` against the supplied wall-clock reading;
//! once the target is reached the display pins to [`EXPIRED`].

use chrono::NaiveDateTime;

/// Shown when the target is not after now.
pub const EXPIRED: &str = "00:00:00";

#[derive(Debug, Clone)]
pub struct Countdown {
    target: NaiveDateTime,
    display: String,
}

impl Countdown {
    pub fn new(target: NaiveDateTime) -> Self {
        Self {
            target,
            display: EXPIRED.to_string(),
        }
    }

    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    /// Replaces the target. The next tick picks it up.
    pub fn set_target(&mut self, target: NaiveDateTime) {
        self.target = target;
    }

    /// Recomputes the display. Returns `true` if the text changed.
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        let next = remaining(self.target, now);
        if next == self.display {
            return false;
        }
        self.display = next;
        true
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.target <= now
    }
}

/// Formats `target - now` as `HH:MM:SS`, flooring sub-second remainders.
/// Hours are padded to two digits but never truncated.
pub fn remaining(target: NaiveDateTime, now: NaiveDateTime) -> String {
    if target <= now {
        return EXPIRED.to_string();
    }
    let secs = (target - now).num_seconds();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
