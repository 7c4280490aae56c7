use chrono::{Datelike, NaiveDate};

use crate::engine::dates;

/// Number of days in the visible window.
pub const WEEK_DAYS: i64 = 7;

/// The visible half-open span `[week_start, week_start + 7)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub week_start: NaiveDate,
}

impl WeekWindow {
    pub fn new(week_start: NaiveDate) -> Self {
        Self { week_start }
    }

    /// The window whose first day is the Monday on or before `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let weekday = date.weekday().num_days_from_monday() as i64;
        Self::new(dates::add_days(date, -weekday))
    }

    /// The seven dates of the window, in order.
    pub fn days(&self) -> [NaiveDate; 7] {
        let mut days = [self.week_start; 7];
        for (i, day) in days.iter_mut().enumerate() {
            *day = dates::add_days(self.week_start, i as i64);
        }
        days
    }

    /// Last visible date (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        dates::add_days(self.week_start, WEEK_DAYS - 1)
    }

    /// Day index of `date` relative to the window start. May fall outside 0..=6.
    pub fn day_index(&self, date: NaiveDate) -> i64 {
        dates::day_offset(self.week_start, date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (0..WEEK_DAYS).contains(&self.day_index(date))
    }

    /// Column to highlight as "today", if today is in view.
    pub fn today_index(&self, today: NaiveDate) -> Option<usize> {
        self.contains(today).then(|| self.day_index(today) as usize)
    }

    /// Shift the window one week forward. Task dates are untouched.
    pub fn next(&mut self) {
        self.week_start = dates::add_days(self.week_start, WEEK_DAYS);
    }

    /// Shift the window one week back.
    pub fn previous(&mut self) {
        self.week_start = dates::add_days(self.week_start, -WEEK_DAYS);
    }
}
