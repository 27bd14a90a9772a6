//! # Date Selector
//!
//! Five [`FieldSelector`]s plus a cursor. Four discrete actions drive it:
//!
//! ```text
//! select-left   cursor = max(cursor - 1, 0)
//! select-right  cursor = min(cursor + 1, 4)
//! increase      active field += 1 (cyclic)  → Updated
//! decrease      active field -= 1 (cyclic)  → Updated
//! ```
//!
//! Fields cycle independently: month 12 → 1 leaves the year alone. Changing
//! the year or month re-derives the day's upper bound and re-seats the day on
//! the new ring before `Updated` is returned.
//!
//! Persistence and countdown retargeting are not handled here; the reducer in
//! `action.rs` reacts to the returned [`SelectorEvent`].

use super::calendar::{days_in_month, is_leap_year};
use super::error::CalendarError;
use super::field::FieldSelector;
use super::target::TargetDate;

/// Widest year range the date model accepts.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// The editable fields, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Hour,
        Field::Minute,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
        }
    }

    /// Year or month edits change the length of the current month.
    fn reshapes_day(self) -> bool {
        matches!(self, Field::Year | Field::Month)
    }
}

/// Emitted after every successful increase/decrease. Carries no payload;
/// receivers re-read [`DateSelector::target_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    Updated,
}

/// Render snapshot of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct DateSelector {
    cursor: usize,
    fields: [FieldSelector; 5],
}

impl DateSelector {
    /// Builds a selector over `[min_year, max_year]` holding `date`. Fails if
    /// any field of `date` is out of bounds (including a day past month end).
    pub fn new(date: TargetDate, min_year: i32, max_year: i32) -> Result<Self, CalendarError> {
        let days = days_in_month(date.month, is_leap_year(date.year))?;
        let fields = [
            FieldSelector::new(Field::Year.label(), min_year, max_year, Some(date.year))?,
            FieldSelector::new(Field::Month.label(), 1, 12, Some(date.month))?,
            FieldSelector::new(Field::Day.label(), 1, days, Some(date.day))?,
            FieldSelector::new(Field::Hour.label(), 0, 23, Some(date.hour))?,
            FieldSelector::new(Field::Minute.label(), 0, 59, Some(date.minute))?,
        ];
        Ok(Self { cursor: 0, fields })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_field(&self) -> Field {
        Field::ALL[self.cursor]
    }

    pub fn field(&self, field: Field) -> &FieldSelector {
        &self.fields[field.index()]
    }

    pub fn select_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_right(&mut self) {
        self.cursor = (self.cursor + 1).min(Field::ALL.len() - 1);
    }

    pub fn increase(&mut self) -> Result<SelectorEvent, CalendarError> {
        self.apply(1)
    }

    pub fn decrease(&mut self) -> Result<SelectorEvent, CalendarError> {
        self.apply(-1)
    }

    fn apply(&mut self, delta: i64) -> Result<SelectorEvent, CalendarError> {
        let field = self.selected_field();
        self.fields[field.index()].step(delta)?;
        if field.reshapes_day() {
            self.refresh_day_bound()?;
        }
        Ok(SelectorEvent::Updated)
    }

    fn refresh_day_bound(&mut self) -> Result<(), CalendarError> {
        let year = self.field(Field::Year).value();
        let month = self.field(Field::Month).value();
        let days = days_in_month(month, is_leap_year(year))?;
        self.fields[Field::Day.index()].set_max(days)
    }

    /// Current values as a detached copy.
    pub fn target_date(&self) -> TargetDate {
        TargetDate::from_array(self.fields.each_ref().map(FieldSelector::value))
    }

    pub fn views(&self) -> Vec<FieldView> {
        Field::ALL
            .iter()
            .map(|&field| FieldView {
                field,
                text: self.field(field).display(),
                selected: field.index() == self.cursor,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(date: TargetDate) -> DateSelector {
        DateSelector::new(date, MIN_YEAR, MAX_YEAR).unwrap()
    }

    fn move_to(selector: &mut DateSelector, field: Field) {
        while selector.cursor() > field.index() {
            selector.select_left();
        }
        while selector.cursor() < field.index() {
            selector.select_right();
        }
    }

    #[test]
    fn test_cursor_starts_on_year_and_clamps() {
        let mut s = selector(TargetDate::DEFAULT);
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.selected_field(), Field::Year);

        s.select_left();
        assert_eq!(s.cursor(), 0);

        for _ in 0..10 {
            s.select_right();
        }
        assert_eq!(s.cursor(), 4);
        assert_eq!(s.selected_field(), Field::Minute);
    }

    #[test]
    fn test_increase_emits_updated() {
        let mut s = selector(TargetDate::DEFAULT);
        assert_eq!(s.increase(), Ok(SelectorEvent::Updated));
        assert_eq!(s.target_date().year, 2027);
        assert_eq!(s.decrease(), Ok(SelectorEvent::Updated));
        assert_eq!(s.target_date().year, 2026);
    }

    #[test]
    fn test_month_wraps_without_touching_year() {
        let mut s = selector(TargetDate::new(2026, 12, 10, 0, 0));
        move_to(&mut s, Field::Month);
        s.increase().unwrap();
        assert_eq!(s.target_date(), TargetDate::new(2026, 1, 10, 0, 0));
        s.decrease().unwrap();
        assert_eq!(s.target_date(), TargetDate::new(2026, 12, 10, 0, 0));
    }

    #[test]
    fn test_minute_and_hour_wrap_without_cascading() {
        let mut s = selector(TargetDate::new(2026, 1, 1, 23, 59));
        move_to(&mut s, Field::Minute);
        s.increase().unwrap();
        assert_eq!(s.target_date(), TargetDate::new(2026, 1, 1, 23, 0));
        move_to(&mut s, Field::Hour);
        s.increase().unwrap();
        assert_eq!(s.target_date(), TargetDate::new(2026, 1, 1, 0, 0));
    }

    #[test]
    fn test_month_change_into_leap_february_rewraps_day() {
        let mut s = selector(TargetDate::new(2024, 1, 30, 0, 0));
        move_to(&mut s, Field::Month);
        s.increase().unwrap();
        let date = s.target_date();
        assert_eq!(date.month, 2);
        assert_eq!(s.field(Field::Day).max(), 29);
        assert_eq!(date.day, 1);
    }

    #[test]
    fn test_month_change_keeps_day_that_still_fits() {
        let mut s = selector(TargetDate::new(2023, 3, 15, 0, 0));
        move_to(&mut s, Field::Month);
        s.decrease().unwrap();
        assert_eq!(s.target_date(), TargetDate::new(2023, 2, 15, 0, 0));
        assert_eq!(s.field(Field::Day).max(), 28);
    }

    #[test]
    fn test_year_change_recomputes_february_length() {
        let mut s = selector(TargetDate::new(2024, 2, 29, 0, 0));
        s.increase().unwrap();
        let date = s.target_date();
        assert_eq!(date.year, 2025);
        assert_eq!(s.field(Field::Day).max(), 28);
        assert_eq!(date.day, 1);
    }

    #[test]
    fn test_day_wraps_within_month_length() {
        let mut s = selector(TargetDate::new(2023, 2, 28, 0, 0));
        move_to(&mut s, Field::Day);
        s.increase().unwrap();
        assert_eq!(s.target_date().day, 1);
        s.decrease().unwrap();
        assert_eq!(s.target_date().day, 28);
    }

    #[test]
    fn test_year_wraps_at_configured_range() {
        let mut s = DateSelector::new(TargetDate::new(2050, 1, 1, 0, 0), 2000, 2050).unwrap();
        s.increase().unwrap();
        assert_eq!(s.target_date().year, 2000);
        s.decrease().unwrap();
        assert_eq!(s.target_date().year, 2050);
    }

    #[test]
    fn test_new_rejects_out_of_range_date() {
        assert!(DateSelector::new(TargetDate::new(2023, 2, 29, 0, 0), MIN_YEAR, MAX_YEAR).is_err());
        assert!(DateSelector::new(TargetDate::new(2026, 13, 1, 0, 0), MIN_YEAR, MAX_YEAR).is_err());
        assert!(DateSelector::new(TargetDate::new(1999, 1, 1, 0, 0), 2000, 2050).is_err());
    }

    #[test]
    fn test_errors_name_the_offending_field() {
        let err = DateSelector::new(TargetDate::new(2026, 1, 1, 24, 0), MIN_YEAR, MAX_YEAR)
            .unwrap_err();
        assert_eq!(err, CalendarError::out_of_range(Field::Hour.label(), 24, 0, 23));
        assert!(err.to_string().starts_with("hour 24"));
    }

    #[test]
    fn test_views_are_zero_padded_with_selection() {
        let mut s = selector(TargetDate::new(2026, 3, 7, 9, 5));
        s.select_right();
        let views = s.views();
        let texts: Vec<&str> = views.iter().map(|v| v.text.as_str()).collect();
        assert_eq!(texts, ["2026", "03", "07", "09", "05"]);
        let selected: Vec<bool> = views.iter().map(|v| v.selected).collect();
        assert_eq!(selected, [false, true, false, false, false]);
    }

    #[test]
    fn test_target_date_is_a_copy() {
        let mut s = selector(TargetDate::DEFAULT);
        let before = s.target_date();
        s.increase().unwrap();
        assert_eq!(before, TargetDate::DEFAULT);
        assert_ne!(s.target_date(), before);
    }
}
