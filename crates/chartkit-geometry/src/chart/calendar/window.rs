//! The date window a calendar grid covers.

use chrono::{Datelike, Days, NaiveDate};

use crate::{GeometryError, GeometryResult};

/// Days per grid column.
pub const DAYS_IN_WEEK: usize = 7;

/// Day-of-week with Sunday as 0.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// `num_days` days ending on (and including) `end_date`, padded out to whole
/// Sunday-to-Saturday weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    end_date: NaiveDate,
    num_days: u32,
}

impl CalendarWindow {
    /// Default number of days shown.
    pub const DEFAULT_NUM_DAYS: u32 = 200;

    /// Create a window.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyDateWindow`] when `num_days` is zero or
    /// the padded grid falls outside the representable dates.
    pub fn new(end_date: NaiveDate, num_days: u32) -> GeometryResult<Self> {
        if num_days == 0 {
            return Err(GeometryError::EmptyDateWindow);
        }
        let window = Self { end_date, num_days };
        // The padded grid must fit in the representable date range.
        end_date
            .checked_sub_days(Days::new(u64::from(num_days) + DAYS_IN_WEEK as u64))
            .and_then(|_| end_date.checked_add_days(Days::new(DAYS_IN_WEEK as u64)))
            .ok_or(GeometryError::EmptyDateWindow)?;
        Ok(window)
    }

    /// Last day of the window, inclusive.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of in-range days.
    pub fn num_days(&self) -> u32 {
        self.num_days
    }

    /// First in-range day.
    pub fn start_date(&self) -> NaiveDate {
        self.end_date - Days::new(u64::from(self.num_days - 1))
    }

    /// Padding slots before the start date in its week.
    pub fn leading_empty_days(&self) -> usize {
        weekday_index(self.start_date())
    }

    /// Padding slots after the end date in its week.
    pub fn trailing_empty_days(&self) -> usize {
        DAYS_IN_WEEK - 1 - weekday_index(self.end_date)
    }

    /// Number of week columns.
    pub fn week_count(&self) -> usize {
        let slots = self.num_days as usize + self.leading_empty_days() + self.trailing_empty_days();
        slots.div_ceil(DAYS_IN_WEEK)
    }

    /// Total grid slots, padding included.
    pub fn slot_count(&self) -> usize {
        self.week_count() * DAYS_IN_WEEK
    }

    /// The Sunday the grid starts on.
    pub fn grid_start(&self) -> NaiveDate {
        self.start_date() - Days::new(self.leading_empty_days() as u64)
    }

    /// Date of grid slot `day_index`.
    pub fn date_for_index(&self, day_index: usize) -> NaiveDate {
        self.grid_start() + Days::new(day_index as u64)
    }

    /// Grid slot of `date`, which may be negative or past the grid.
    pub fn index_for_date(&self, date: NaiveDate) -> i64 {
        (date - self.grid_start()).num_days()
    }

    /// Whether slot `day_index` lies inside `start_date..=end_date`.
    pub fn is_in_range(&self, day_index: usize) -> bool {
        let leading = self.leading_empty_days();
        day_index >= leading && day_index < leading + self.num_days as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_partial_weeks() {
        let window = CalendarWindow::new(date(2024, 5, 31), 8).unwrap();
        assert_eq!(window.start_date(), date(2024, 5, 24));
        assert_eq!(window.leading_empty_days(), 5);
        assert_eq!(window.trailing_empty_days(), 1);
        assert_eq!(window.week_count(), 2);
        assert_eq!(window.grid_start(), date(2024, 5, 19));
    }

    #[test]
    fn test_single_day() {
        // 2024-06-02 is a Sunday.
        let window = CalendarWindow::new(date(2024, 6, 2), 1).unwrap();
        assert_eq!(window.leading_empty_days(), 0);
        assert_eq!(window.trailing_empty_days(), 6);
        assert_eq!(window.week_count(), 1);
        assert!(window.is_in_range(0));
        assert!(!window.is_in_range(1));
    }

    #[test]
    fn test_index_round_trip_through_dates() {
        let window = CalendarWindow::new(date(2024, 3, 10), 30).unwrap();
        let d = date(2024, 2, 29);
        let index = window.index_for_date(d);
        assert_eq!(window.date_for_index(index as usize), d);
        assert_eq!(window.index_for_date(window.grid_start() - Days::new(1)), -1);
    }

    #[test]
    fn test_empty_window_rejected() {
        assert_eq!(
            CalendarWindow::new(date(2024, 5, 31), 0),
            Err(GeometryError::EmptyDateWindow)
        );
        assert_eq!(
            CalendarWindow::new(NaiveDate::MIN, 5),
            Err(GeometryError::EmptyDateWindow)
        );
    }
}
