// src/export/excel_date.rs

use chrono::NaiveDate;

/// Interpret a `YYYY-MM-DD` cell as a date, returning the Excel serial
/// and the number format to display it with.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(("yyyy-mm-dd", excel_serial(d)?))
}

fn excel_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_matches_excel() {
        // 2026-02-15 is serial 46068 in Excel's 1900 date system
        assert_eq!(parse_to_excel_date("2026-02-15"), Some(("yyyy-mm-dd", 46068.0)));
        assert_eq!(parse_to_excel_date("not a date"), None);
    }
}
