//! Time utilities: parsing HH:MM, timestamp parsing, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse an explicit event instant: "YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DD HH:MM".
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

/// Format signed minutes as ±HH:MM.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
