//! Calendar-date helpers for the projection engine.
//!
//! All domain dates are plain calendar days (`NaiveDate`); no time-of-day
//! component exists anywhere in the model.

use chrono::{Datelike, NaiveDate};

/// Number of calendar days from `start` to `end` (negative when `end` is
/// before `start`).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Number of whole calendar-month boundaries between `start` and `end`,
/// counted the way a wall calendar does: `(year diff) * 12 + (month diff)`.
/// Day-of-month is ignored; the result is negative when `end` precedes
/// `start`.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
        - i64::from(start.month())
}

/// The `(month, year)` pair `offset` whole months after `date`'s month.
pub fn month_at_offset(date: NaiveDate, offset: i64) -> (u32, i32) {
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + offset;
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12);
    (month0 as u32 + 1, year as i32)
}

/// The last calendar day of the given month.
pub fn last_day_of_month(month: u32, year: i32) -> NaiveDate {
    let (next_month, next_year) = if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    };
    first_day_of_month(next_month, next_year)
        .pred_opt()
        .unwrap_or_default()
}

/// The first calendar day of the given month.
pub fn first_day_of_month(month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

/// The first day of the month after the given one. Used as the closing
/// boundary for monthly checkpoints.
pub fn first_day_of_following_month(month: u32, year: i32) -> NaiveDate {
    let (next_month, next_year) = if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    };
    first_day_of_month(next_month, next_year)
}
