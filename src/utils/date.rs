use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Optional `--date` argument, defaulting to today.
pub fn parse_or_today(s: Option<&String>) -> Option<NaiveDate> {
    match s {
        Some(v) => parse_date(v),
        None => Some(today()),
    }
}

/// `dd.mm.yyyy`, the format used in report headers.
pub fn display_date(d: NaiveDate) -> String {
    d.format("%d.%m.%Y").to_string()
}

pub fn weekday_name(d: NaiveDate) -> String {
    d.format("%A").to_string()
}
