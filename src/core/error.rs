//! # Core Errors
//!
//! Bounds violations in the date model. These signal a caller bug (or a
//! corrupt date file at startup) and are never retried.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A value outside its declared `[min, max]` range.
    #[error("{what} {value} is outside [{min}, {max}]")]
    InvalidInput {
        what: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("month {0} is outside [1, 12]")]
    InvalidMonth(i32),

    /// A range whose lower bound exceeds its upper bound.
    #[error("invalid bounds: min {min} > max {max}")]
    InvalidBounds { min: i32, max: i32 },
}

impl CalendarError {
    pub(crate) fn out_of_range(what: &'static str, value: i32, min: i32, max: i32) -> Self {
        CalendarError::InvalidInput {
            what,
            value,
            min,
            max,
        }
    }
}
