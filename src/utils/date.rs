//! Calendar-day helpers. Days are process-local: the engine operates on the
//! scheduler's local calendar, not per-employee time zones.

use crate::errors::{AppError, AppResult};
use chrono::{Days, Local, NaiveDate};

pub fn parse_day(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The day a scheduled batch run closes: local wall-clock date minus one.
pub fn yesterday() -> NaiveDate {
    today() - Days::new(1)
}

/// Inclusive [00:00:00, 23:59:59] window of a day, as stored timestamp text.
pub fn day_window(day: NaiveDate) -> (String, String) {
    let d = day.format("%Y-%m-%d");
    (format!("{d} 00:00:00"), format!("{d} 23:59:59"))
}
