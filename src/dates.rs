//! Calendar helpers over `NaiveDate`.
//!
//! Every date in the planner is a plain calendar date. "Today" is taken in
//! UTC so that day offsets never depend on the local timezone.

use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::error::{PlannerError, Result};

/// Current calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Monday of the week containing `date` (Sunday belongs to the week before).
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// Shift a date by a whole number of days.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Whole days from `earlier` to `later`.
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// English weekday name, e.g. "Monday".
pub fn day_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", text)))
}
