//! # Target Date
//!
//! The five-integer destination of the countdown. A plain value: the date
//! selector owns the live copy, everyone else receives snapshots.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::calendar::{days_in_month, is_leap_year};
use super::error::CalendarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

impl TargetDate {
    /// Used when no date file exists, and for trailing fields a short file omits.
    pub const DEFAULT: TargetDate = TargetDate {
        year: 2026,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
    };

    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Overwrites the leading fields of [`Self::DEFAULT`] with `values`, in
    /// `year, month, day, hour, minute` order. Extra values are ignored.
    pub fn from_leading(values: &[i32]) -> Self {
        let mut fields = Self::DEFAULT.to_array();
        for (slot, value) in fields.iter_mut().zip(values) {
            *slot = *value;
        }
        Self::from_array(fields)
    }

    pub fn from_array([year, month, day, hour, minute]: [i32; 5]) -> Self {
        Self::new(year, month, day, hour, minute)
    }

    pub fn to_array(self) -> [i32; 5] {
        [self.year, self.month, self.day, self.hour, self.minute]
    }

    /// Local wall-clock instant this date names.
    pub fn to_datetime(self) -> Result<NaiveDateTime, CalendarError> {
        let days = days_in_month(self.month, is_leap_year(self.year))?;
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .and_then(|date| date.and_hms_opt(self.hour as u32, self.minute as u32, 0))
            .ok_or_else(|| self.first_violation(days))
    }

    fn first_violation(self, days: i32) -> CalendarError {
        if !(1..=days).contains(&self.day) {
            CalendarError::out_of_range("day", self.day, 1, days)
        } else if !(0..=23).contains(&self.hour) {
            CalendarError::out_of_range("hour", self.hour, 0, 23)
        } else if !(0..=59).contains(&self.minute) {
            CalendarError::out_of_range("minute", self.minute, 0, 59)
        } else {
            CalendarError::out_of_range("year", self.year, 1, 9999)
        }
    }
}

impl Default for TargetDate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_leading_keeps_trailing_defaults() {
        assert_eq!(
            TargetDate::from_leading(&[2031, 7]),
            TargetDate::new(2031, 7, 1, 0, 0)
        );
        assert_eq!(TargetDate::from_leading(&[]), TargetDate::DEFAULT);
        assert_eq!(
            TargetDate::from_leading(&[2030, 6, 15, 9, 5, 99]),
            TargetDate::new(2030, 6, 15, 9, 5)
        );
    }

    #[test]
    fn test_to_datetime() {
        let dt = TargetDate::new(2030, 6, 15, 9, 5).to_datetime().unwrap();
        assert_eq!(dt.to_string(), "2030-06-15 09:05:00");
    }

    #[test]
    fn test_to_datetime_rejects_impossible_dates() {
        assert_eq!(
            TargetDate::new(2023, 2, 29, 0, 0).to_datetime(),
            Err(CalendarError::out_of_range("day", 29, 1, 28))
        );
        assert_eq!(
            TargetDate::new(2024, 13, 1, 0, 0).to_datetime(),
            Err(CalendarError::InvalidMonth(13))
        );
        assert_eq!(
            TargetDate::new(2024, 1, 1, 24, 0).to_datetime(),
            Err(CalendarError::out_of_range("hour", 24, 0, 23))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetDate::DEFAULT.to_string(), "2026-01-01 00:00");
    }
}
