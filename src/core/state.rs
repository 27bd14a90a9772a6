//! # Application State
//!
//! Core state for the countdown. Domain logic only, no TUI types.
//! Presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── selector: DateSelector    // five editable fields + cursor (owns the target date)
//! ├── countdown: Countdown      // copy of the target instant + rendered HH:MM:SS
//! ├── expired: bool             // target reached as of the last tick
//! ├── status_message: String    // status bar text
//! └── error: Option<String>     // fatal edit error, ends the session
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::countdown::Countdown;
use crate::core::error::CalendarError;
use crate::core::selector::DateSelector;
use crate::core::target::TargetDate;

pub struct App {
    pub selector: DateSelector,
    pub countdown: Countdown,
    pub expired: bool,
    pub status_message: String,
    pub error: Option<String>,
}

impl App {
    pub fn new(date: TargetDate, min_year: i32, max_year: i32) -> Result<Self, CalendarError> {
        let selector = DateSelector::new(date, min_year, max_year)?;
        let countdown = Countdown::new(date.to_datetime()?);
        Ok(Self {
            selector,
            countdown,
            expired: false,
            status_message: target_status(&date),
            error: None,
        })
    }

    pub fn from_config(date: TargetDate, config: &ResolvedConfig) -> Result<Self, CalendarError> {
        Self::new(date, config.min_year, config.max_year)
    }
}

pub(crate) fn target_status(date: &TargetDate) -> String {
    format!("Target: {date}")
}
