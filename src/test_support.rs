//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::selector::{MAX_YEAR, MIN_YEAR};
use crate::core::state::App;
use crate::core::target::TargetDate;

/// Creates a test App targeting [`TargetDate::DEFAULT`] over the full year range.
pub fn test_app() -> App {
    test_app_with(TargetDate::DEFAULT)
}

pub fn test_app_with(date: TargetDate) -> App {
    match App::new(date, MIN_YEAR, MAX_YEAR) {
        Ok(app) => app,
        Err(e) => panic!("invalid test date {date}: {e}"),
    }
}

/// A stable wall-clock reading: 2025-06-01 12:00:00.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}
