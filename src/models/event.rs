use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date-stamped free-text note, persisted under `myGrowthApp_events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub date: NaiveDate, // "YYYY-MM-DD"
    pub time: String,    // locale-formatted, e.g. "19:05"
    pub text: String,
}

impl EventRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
