//! # Calendar Utilities
//!
//! Gregorian leap-year rule, month lengths, and ring arithmetic for the
//! cyclic field editors. No state, no I/O.

use super::error::CalendarError;

/// Gregorian rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-based).
pub fn days_in_month(month: i32, is_leap: bool) -> Result<i32, CalendarError> {
    match month {
        2 if is_leap => Ok(29),
        2 => Ok(28),
        4 | 6 | 9 | 11 => Ok(30),
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        _ => Err(CalendarError::InvalidMonth(month)),
    }
}

/// Folds any `value` onto the ring `[min, max]`.
///
/// Unlike [`cyclic_update`] there is no precondition on `value`; this is what
/// re-seats a day that fell outside a shortened month (day 30 in a 29-day
/// February lands on day 1).
pub fn wrap(min: i32, max: i32, value: i64) -> i32 {
    let min = i64::from(min);
    let width = i64::from(max) - min + 1;
    // Result lies in [min, max], so the narrowing cannot truncate.
    (min + (value - min).rem_euclid(width)) as i32
}

/// Moves `value` by `delta` steps around the ring `[min, max]`, wrapping at
/// both ends. `delta` may be arbitrarily large in either direction.
pub fn cyclic_update(min: i32, max: i32, value: i32, delta: i64) -> Result<i32, CalendarError> {
    if min > max {
        return Err(CalendarError::InvalidBounds { min, max });
    }
    if !(min..=max).contains(&value) {
        return Err(CalendarError::out_of_range("value", value, min, max));
    }
    let width = i64::from(max) - i64::from(min) + 1;
    let delta = delta.rem_euclid(width);
    Ok(wrap(min, max, i64::from(value) + delta))
}
