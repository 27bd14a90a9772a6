//! # Field Selector
//!
//! One bounded integer. The owning [`DateSelector`](super::selector::DateSelector)
//! decides how it moves; this type only guards `min <= value <= max` and knows
//! how wide its rendering should be.

use super::calendar::{cyclic_update, wrap};
use super::error::CalendarError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    name: &'static str,
    min: i32,
    max: i32,
    value: i32,
}

impl FieldSelector {
    /// Creates a field; `initial` defaults to `min`.
    pub fn new(
        name: &'static str,
        min: i32,
        max: i32,
        initial: Option<i32>,
    ) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidBounds { min, max });
        }
        let value = initial.unwrap_or(min);
        if !(min..=max).contains(&value) {
            return Err(CalendarError::out_of_range(name, value, min, max));
        }
        Ok(Self {
            name,
            min,
            max,
            value,
        })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) -> Result<(), CalendarError> {
        if !(self.min..=self.max).contains(&value) {
            return Err(CalendarError::out_of_range(
                self.name, value, self.min, self.max,
            ));
        }
        self.value = value;
        Ok(())
    }

    /// Steps the value around its ring.
    pub fn step(&mut self, delta: i64) -> Result<(), CalendarError> {
        let next = cyclic_update(self.min, self.max, self.value, delta)?;
        self.set_value(next)
    }

    /// Replaces the upper bound and re-seats the current value on the new ring
    /// in the same call, so the invariant never observably breaks.
    pub fn set_max(&mut self, max: i32) -> Result<(), CalendarError> {
        if self.min > max {
            return Err(CalendarError::InvalidBounds { min: self.min, max });
        }
        self.max = max;
        self.value = wrap(self.min, self.max, i64::from(self.value));
        Ok(())
    }

    /// Decimal digits in `max`; values render zero-padded to this width.
    pub fn display_width(&self) -> usize {
        self.max.max(1).unsigned_abs().to_string().len()
    }

    pub fn display(&self) -> String {
        format!("{:0width$}", self.value, width = self.display_width())
    }
}
