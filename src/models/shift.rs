use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Substring in the notes that marks a zero-pay training/course day.
pub const COURSE_MARKER: &str = "קורס";

/// Notes pre-filled for manual entries dated inside the course week.
pub const COURSE_WEEK_NOTE: &str = "קורס הכשרה";

/// One logged shift.
///
/// Serialized with the original camelCase keys (`isSleepover`) so the
/// JSON array stored under `myGrowthApp_trips` stays drop-in compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub is_sleepover: bool,
    #[serde(default)]
    pub notes: String,
}

impl ShiftRecord {
    /// Build a record that has not been assigned an id yet (`id = 0`).
    pub fn new(date: NaiveDate, hours: f64, is_sleepover: bool, notes: impl Into<String>) -> Self {
        Self {
            id: 0,
            date,
            hours,
            is_sleepover,
            notes: notes.into(),
        }
    }

    pub fn is_course_day(&self) -> bool {
        self.hours == 0.0 && self.notes.contains(COURSE_MARKER)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Partial update for `ShiftLedger::update`. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ShiftPatch {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub is_sleepover: Option<bool>,
    pub notes: Option<String>,
}

impl ShiftPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.hours.is_none()
            && self.is_sleepover.is_none()
            && self.notes.is_none()
    }

    pub fn apply_to(&self, record: &mut ShiftRecord) {
        if let Some(d) = self.date {
            record.date = d;
        }
        if let Some(h) = self.hours {
            record.hours = h;
        }
        if let Some(s) = self.is_sleepover {
            record.is_sleepover = s;
        }
        if let Some(n) = &self.notes {
            record.notes = n.clone();
        }
    }
}
