//! Time utilities: parsing HH:MM and the locale-style clock used for events.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Current wall-clock time as two-digit `HH:MM`.
pub fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}
