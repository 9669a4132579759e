// src/export/model.rs

use crate::core::event_log::EventLog;
use crate::core::ledger::{PayRules, gross_pay};
use crate::models::shift::ShiftRecord;
use crate::utils::formatting::hours;
use serde::Serialize;

pub(crate) const STATUS_COURSE: &str = "קורס/אחר";
pub(crate) const STATUS_SHIFT: &str = "משמרת";

/// One exported line per shift.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    #[serde(rename = "תאריך")]
    pub date: String,
    #[serde(rename = "שעות עבודה")]
    pub hours: f64,
    #[serde(rename = "הכנסה (ברוטו)")]
    pub gross_pay: f64,
    #[serde(rename = "סטטוס")]
    pub status: String,
    #[serde(rename = "הערות ואירועים")]
    pub notes: String,
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "תאריך",
        "שעות עבודה",
        "הכנסה (ברוטו)",
        "סטטוס",
        "הערות ואירועים",
    ]
}

/// Build the rows for the given (journey-scoped) shifts.
///
/// The notes column merges the shift notes with that day's events as
/// `• text` lines; empty parts are skipped.
pub fn build_rows(
    shifts: &[ShiftRecord],
    events: &EventLog,
    base_rate: f64,
    rules: &PayRules,
) -> Vec<ReportRow> {
    shifts
        .iter()
        .map(|s| {
            let event_text = events
                .filter_by_date(s.date)
                .iter()
                .map(|e| format!("• {}", e.text))
                .collect::<Vec<_>>()
                .join("\n");

            let notes = [s.notes.as_str(), event_text.as_str()]
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            ReportRow {
                date: s.date_str(),
                hours: s.hours,
                gross_pay: gross_pay(s, base_rate, rules),
                status: if s.hours == 0.0 { STATUS_COURSE } else { STATUS_SHIFT }.to_string(),
                notes,
            }
        })
        .collect()
}

/// Row as strings, in header order.
pub(crate) fn row_to_cells(r: &ReportRow) -> Vec<String> {
    vec![
        r.date.clone(),
        hours(r.hours),
        hours(r.gross_pay),
        r.status.clone(),
        r.notes.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventRecord;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    #[test]
    fn notes_merge_with_same_day_events() {
        let shifts = vec![
            ShiftRecord::new(d(2), 12.0, true, "night"),
            ShiftRecord::new(d(3), 0.0, false, ""),
        ];
        let events = EventLog::from_events(vec![
            EventRecord { id: 2, date: d(2), time: "21:00".into(), text: "patrol".into() },
            EventRecord { id: 1, date: d(2), time: "20:00".into(), text: "briefing".into() },
            EventRecord { id: 3, date: d(4), time: "08:00".into(), text: "other day".into() },
        ]);

        let rows = build_rows(&shifts, &events, 400.0, &PayRules::default());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].gross_pay, 400.0 + 2.0 * 56.0 + 80.0);
        assert_eq!(rows[0].status, STATUS_SHIFT);
        assert!(rows[0].notes.starts_with("night\n• "));
        assert!(rows[0].notes.contains("• patrol"));
        assert!(rows[0].notes.contains("• briefing"));
        assert!(!rows[0].notes.contains("other day"));

        assert_eq!(rows[1].status, STATUS_COURSE);
        assert_eq!(rows[1].notes, "");
    }
}
