//! Ordered collection of shift records and the per-shift pay formula.

use crate::errors::{AppError, AppResult};
use crate::models::shift::{ShiftPatch, ShiftRecord};
use chrono::{NaiveDate, Utc};

/// Constants of the gross pay formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayRules {
    pub overtime_threshold: f64,
    pub overtime_rate: f64,
    pub sleepover_bonus: f64,
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            overtime_threshold: 10.0,
            overtime_rate: 56.0,
            sleepover_bonus: 80.0,
        }
    }
}

impl PayRules {
    pub fn is_overtime(&self, record: &ShiftRecord) -> bool {
        record.hours > self.overtime_threshold
    }
}

/// Gross pay of a single shift.
///
/// A course day (`hours == 0` and the course marker in the notes) pays
/// nothing, whatever its other flags say.
pub fn gross_pay(record: &ShiftRecord, base_rate: f64, rules: &PayRules) -> f64 {
    if record.is_course_day() {
        return 0.0;
    }

    let mut pay = base_rate;

    if rules.is_overtime(record) {
        pay += (record.hours - rules.overtime_threshold) * rules.overtime_rate;
    }

    if record.is_sleepover {
        pay += rules.sleepover_bonus;
    }

    pay
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftLedger {
    records: Vec<ShiftRecord>,
}

impl ShiftLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ShiftRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ShiftRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&ShiftRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a record under a fresh id derived from the current time.
    pub fn add(&mut self, record: ShiftRecord) -> AppResult<i64> {
        self.add_at(record, Utc::now().timestamp_millis())
    }

    /// Append a record, using `now_millis` as the id candidate.
    ///
    /// Ids stay unique and increasing even when several records are added
    /// within the same millisecond.
    pub fn add_at(&mut self, mut record: ShiftRecord, now_millis: i64) -> AppResult<i64> {
        if record.date == NaiveDate::default() {
            return Err(AppError::MissingDate);
        }

        let max_id = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        record.id = now_millis.max(max_id + 1);

        let id = record.id;
        self.records.push(record);
        Ok(id)
    }

    /// Replace the patched fields of the record with the given id.
    pub fn update(&mut self, id: i64, patch: &ShiftPatch) -> AppResult<&ShiftRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::ShiftNotFound(id))?;

        patch.apply_to(record);
        Ok(record)
    }

    /// Remove the record with the given id. Returns whether one was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Records dated on or after `cutoff`, in ledger order.
    pub fn filter_since(&self, cutoff: NaiveDate) -> Vec<ShiftRecord> {
        self.records
            .iter()
            .filter(|r| r.date >= cutoff)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::COURSE_MARKER;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn regular_shift_earns_base_rate() {
        let rules = PayRules::default();
        for h in [0.5, 8.0, 10.0] {
            let r = ShiftRecord::new(d(2026, 3, 1), h, false, "");
            assert_eq!(gross_pay(&r, 400.0, &rules), 400.0);
        }
    }

    #[test]
    fn overtime_is_paid_above_ten_hours() {
        let r = ShiftRecord::new(d(2026, 3, 1), 12.0, false, "");
        assert_eq!(gross_pay(&r, 400.0, &PayRules::default()), 512.0);
    }

    #[test]
    fn sleepover_adds_bonus() {
        let r = ShiftRecord::new(d(2026, 3, 1), 12.0, true, "");
        assert_eq!(gross_pay(&r, 400.0, &PayRules::default()), 592.0);
    }

    #[test]
    fn course_day_pays_nothing_even_with_sleepover() {
        let notes = format!("{COURSE_MARKER} הכשרה");
        let r = ShiftRecord::new(d(2026, 2, 9), 0.0, true, notes);
        assert_eq!(gross_pay(&r, 400.0, &PayRules::default()), 0.0);
    }

    #[test]
    fn zero_hours_without_marker_keeps_base_rate() {
        let r = ShiftRecord::new(d(2026, 2, 9), 0.0, false, "holiday");
        assert_eq!(gross_pay(&r, 400.0, &PayRules::default()), 400.0);
    }

    #[test]
    fn add_assigns_unique_increasing_ids() {
        let mut ledger = ShiftLedger::new();
        let a = ledger
            .add_at(ShiftRecord::new(d(2026, 3, 1), 8.0, false, ""), 1000)
            .unwrap();
        let b = ledger
            .add_at(ShiftRecord::new(d(2026, 3, 2), 8.0, false, ""), 1000)
            .unwrap();
        assert_eq!(a, 1000);
        assert_eq!(b, 1001);
    }

    #[test]
    fn add_rejects_missing_date() {
        let mut ledger = ShiftLedger::new();
        let r = ShiftRecord::new(NaiveDate::default(), 8.0, false, "");
        assert!(matches!(ledger.add_at(r, 1), Err(AppError::MissingDate)));
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let mut ledger = ShiftLedger::new();
        let patch = ShiftPatch {
            hours: Some(9.0),
            ..Default::default()
        };
        assert!(matches!(
            ledger.update(42, &patch),
            Err(AppError::ShiftNotFound(42))
        ));
    }

    #[test]
    fn update_replaces_only_patched_fields() {
        let mut ledger = ShiftLedger::new();
        let id = ledger
            .add_at(ShiftRecord::new(d(2026, 3, 1), 8.0, false, "night"), 10)
            .unwrap();

        let patch = ShiftPatch {
            hours: Some(11.5),
            is_sleepover: Some(true),
            ..Default::default()
        };
        let updated = ledger.update(id, &patch).unwrap();

        assert_eq!(updated.hours, 11.5);
        assert!(updated.is_sleepover);
        assert_eq!(updated.notes, "night");
        assert_eq!(updated.date, d(2026, 3, 1));
    }

    #[test]
    fn delete_keeps_order_and_is_idempotent() {
        let mut ledger = ShiftLedger::new();
        let ids: Vec<i64> = (1..=4)
            .map(|i| {
                ledger
                    .add_at(ShiftRecord::new(d(2026, 3, i), 8.0, false, ""), i as i64)
                    .unwrap()
            })
            .collect();

        assert!(ledger.delete(ids[1]));
        assert!(!ledger.delete(ids[1]));

        let remaining: Vec<i64> = ledger.records().iter().map(|r| r.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn filter_since_includes_cutoff_day() {
        let ledger = ShiftLedger::from_records(vec![
            ShiftRecord {
                id: 1,
                ..ShiftRecord::new(d(2026, 1, 31), 8.0, false, "")
            },
            ShiftRecord {
                id: 2,
                ..ShiftRecord::new(d(2026, 2, 1), 8.0, false, "")
            },
            ShiftRecord {
                id: 3,
                ..ShiftRecord::new(d(2026, 2, 20), 8.0, false, "")
            },
        ]);

        let ids: Vec<i64> = ledger
            .filter_since(d(2026, 2, 1))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
