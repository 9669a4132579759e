//! Free-text daily annotations, stored newest first.

use crate::errors::{AppError, AppResult};
use crate::models::event::EventRecord;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<EventRecord>,
}

impl EventLog {
    pub fn from_events(events: Vec<EventRecord>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn add(&mut self, date: NaiveDate, time: &str, text: &str) -> AppResult<&EventRecord> {
        self.add_at(date, time, text, Utc::now().timestamp_millis())
    }

    /// Prepend an event; the id is `now_millis`, bumped past existing ids.
    pub fn add_at(
        &mut self,
        date: NaiveDate,
        time: &str,
        text: &str,
        now_millis: i64,
    ) -> AppResult<&EventRecord> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyEvent);
        }

        let max_id = self.events.iter().map(|e| e.id).max().unwrap_or(0);

        self.events.insert(
            0,
            EventRecord {
                id: now_millis.max(max_id + 1),
                date,
                time: time.to_string(),
                text: text.to_string(),
            },
        );

        Ok(&self.events[0])
    }

    /// Events on `date`, in stored (newest first) order.
    pub fn filter_by_date(&self, date: NaiveDate) -> Vec<&EventRecord> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Chronological `[time] - text` lines for one day.
    pub fn share_text(&self, date: NaiveDate) -> Option<String> {
        let day = self.filter_by_date(date);
        if day.is_empty() {
            return None;
        }

        let lines: Vec<String> = day
            .iter()
            .rev()
            .map(|e| format!("[{}] - {}", e.time, e.text))
            .collect();

        Some(lines.join("\n"))
    }
}

/// Events grouped by date: dates newest first, times descending within a date.
pub fn group_by_date(events: &[EventRecord]) -> Vec<(NaiveDate, Vec<&EventRecord>)> {
    let mut groups: BTreeMap<NaiveDate, Vec<&EventRecord>> = BTreeMap::new();

    for ev in events {
        groups.entry(ev.date).or_default().push(ev);
    }

    groups
        .into_iter()
        .rev()
        .map(|(date, mut evs)| {
            // stable: same-time events keep stored order
            evs.sort_by(|a, b| b.time.cmp(&a.time));
            (date, evs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn add_prepends_and_rejects_blank_text() {
        let mut log = EventLog::default();
        log.add_at(d(2026, 3, 1), "08:00", "first", 1).unwrap();
        log.add_at(d(2026, 3, 1), "09:00", "second", 1).unwrap();

        assert_eq!(log.events()[0].text, "second");
        assert_eq!(log.events()[0].id, 2);
        assert!(matches!(
            log.add_at(d(2026, 3, 1), "10:00", "   ", 5),
            Err(AppError::EmptyEvent)
        ));
    }

    #[test]
    fn grouping_orders_dates_and_times_descending() {
        let mut log = EventLog::default();
        log.add_at(d(2026, 3, 1), "08:00", "a", 1).unwrap();
        log.add_at(d(2026, 3, 2), "07:30", "b", 2).unwrap();
        log.add_at(d(2026, 3, 1), "18:15", "c", 3).unwrap();

        let groups = group_by_date(log.events());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, d(2026, 3, 2));
        let texts: Vec<&str> = groups[1].1.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "a"]);
    }

    #[test]
    fn share_text_reads_morning_to_evening() {
        let mut log = EventLog::default();
        log.add_at(d(2026, 3, 1), "08:00", "patrol", 1).unwrap();
        log.add_at(d(2026, 3, 1), "12:00", "lunch", 2).unwrap();
        log.add_at(d(2026, 3, 2), "09:00", "other day", 3).unwrap();

        assert_eq!(
            log.share_text(d(2026, 3, 1)).unwrap(),
            "[08:00] - patrol\n[12:00] - lunch"
        );
        assert!(log.share_text(d(2026, 3, 5)).is_none());
    }
}
