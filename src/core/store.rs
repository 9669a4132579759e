//! Typed access to the persistent store.
//!
//! `AppStore` owns the connection and is the only place that knows how each
//! value is encoded under its key. Components receive data from it instead
//! of reading keys themselves.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::{log, storage};
use crate::errors::{AppError, AppResult};
use crate::models::event::EventRecord;
use crate::models::gear::{GearEntry, GearItem, default_gear};
use crate::models::settings::{
    DEFAULT_SAVINGS_GOAL, DEFAULT_SHIFT_RATE, DEFAULT_USER_NAME, Settings, StorageKey,
    TRAINING_CHECKLIST_PREFIX, TRAINING_COMPLETE_PREFIX, default_start_date,
    default_workout_time,
};
use crate::models::shift::ShiftRecord;
use crate::models::training::{TrainingDay, TrainingLog};
use crate::core::event_log::EventLog;
use crate::core::ledger::ShiftLedger;
use crate::ui::messages::warning;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Day format embedded in the training keys (en-GB locale).
const TRAINING_KEY_DATE_FORMAT: &str = "%d/%m/%Y";

pub struct AppStore {
    pool: DbPool,
}

impl AppStore {
    /// Open the store at `path`, creating tables and migrating legacy keys.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn pool_mut(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Append a line to the internal audit log. Failures are reported, not raised.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = log::ttlog(self.conn(), operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    // ---------------------------
    // Settings
    // ---------------------------

    pub fn load_settings(&self) -> AppResult<Settings> {
        let conn = self.conn();

        let user_name = non_empty(storage::get(conn, StorageKey::UserName.as_str())?)
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

        let employee_id = storage::get(conn, StorageKey::EmployeeId.as_str())?.unwrap_or_default();

        let start_date = non_empty(storage::get(conn, StorageKey::StartDate.as_str())?)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
            .unwrap_or_else(default_start_date);

        let savings_goal = parse_number(storage::get(conn, StorageKey::SavingsGoal.as_str())?)
            .unwrap_or(DEFAULT_SAVINGS_GOAL);

        let shift_rate = parse_number(storage::get(conn, StorageKey::ShiftRate.as_str())?)
            .unwrap_or(DEFAULT_SHIFT_RATE);

        let workout_time = non_empty(storage::get(conn, StorageKey::WorkoutTime.as_str())?)
            .and_then(|s| NaiveTime::parse_from_str(s.trim(), "%H:%M").ok())
            .unwrap_or_else(default_workout_time);

        let sound_enabled = storage::get(conn, StorageKey::SoundEnabled.as_str())?
            .map(|s| s.trim() != "false")
            .unwrap_or(true);

        Ok(Settings {
            user_name,
            employee_id,
            start_date,
            savings_goal,
            shift_rate,
            workout_time,
            sound_enabled,
        })
    }

    pub fn save_settings(&self, s: &Settings) -> AppResult<()> {
        let conn = self.conn();
        storage::set(conn, StorageKey::UserName.as_str(), &s.user_name)?;
        storage::set(conn, StorageKey::EmployeeId.as_str(), &s.employee_id)?;
        storage::set(
            conn,
            StorageKey::StartDate.as_str(),
            &s.start_date.format("%Y-%m-%d").to_string(),
        )?;
        storage::set(conn, StorageKey::SavingsGoal.as_str(), &s.savings_goal.to_string())?;
        storage::set(conn, StorageKey::ShiftRate.as_str(), &s.shift_rate.to_string())?;
        storage::set(
            conn,
            StorageKey::WorkoutTime.as_str(),
            &s.workout_time.format("%H:%M").to_string(),
        )?;
        storage::set(
            conn,
            StorageKey::SoundEnabled.as_str(),
            if s.sound_enabled { "true" } else { "false" },
        )?;
        Ok(())
    }

    // ---------------------------
    // Shift ledger
    // ---------------------------

    pub fn load_ledger(&self) -> AppResult<ShiftLedger> {
        let records: Vec<ShiftRecord> = self.load_json_or_default(StorageKey::Trips)?;
        Ok(ShiftLedger::from_records(records))
    }

    pub fn save_ledger(&self, ledger: &ShiftLedger) -> AppResult<()> {
        self.save_json(StorageKey::Trips, ledger.records())
    }

    // ---------------------------
    // Event log
    // ---------------------------

    pub fn load_events(&self) -> AppResult<EventLog> {
        let events: Vec<EventRecord> = self.load_json_or_default(StorageKey::Events)?;
        Ok(EventLog::from_events(events))
    }

    pub fn save_events(&self, log: &EventLog) -> AppResult<()> {
        self.save_json(StorageKey::Events, log.events())
    }

    // ---------------------------
    // Training
    // ---------------------------

    /// Every stored training day, read from the per-day keys.
    pub fn load_training(&self) -> AppResult<TrainingLog> {
        let conn = self.conn();
        let mut out: TrainingLog = BTreeMap::new();

        for (key, value) in storage::with_prefix(conn, TRAINING_COMPLETE_PREFIX)? {
            if let Some(date) = parse_training_key(&key, TRAINING_COMPLETE_PREFIX) {
                out.entry(date).or_default().completed = value == "true";
            }
        }

        for (key, value) in storage::with_prefix(conn, TRAINING_CHECKLIST_PREFIX)? {
            let Some(date) = parse_training_key(&key, TRAINING_CHECKLIST_PREFIX) else {
                continue;
            };
            match serde_json::from_str::<BTreeMap<String, bool>>(&value) {
                Ok(checklist) => out.entry(date).or_default().checklist = checklist,
                Err(e) => warning(format!("Ignoring malformed value for {key}: {e}")),
            }
        }

        Ok(out)
    }

    pub fn load_training_day(&self, date: NaiveDate) -> AppResult<TrainingDay> {
        let conn = self.conn();

        let completed = storage::get(conn, &training_key(TRAINING_COMPLETE_PREFIX, date))?
            .map(|v| v == "true")
            .unwrap_or(false);

        let checklist = match storage::get(conn, &training_key(TRAINING_CHECKLIST_PREFIX, date))? {
            Some(v) => serde_json::from_str(&v).unwrap_or_else(|e| {
                warning(format!("Ignoring malformed training checklist for {date}: {e}"));
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        };

        Ok(TrainingDay {
            completed,
            checklist,
        })
    }

    pub fn save_training_day(&self, date: NaiveDate, day: &TrainingDay) -> AppResult<()> {
        let conn = self.conn();
        storage::set(
            conn,
            &training_key(TRAINING_COMPLETE_PREFIX, date),
            if day.completed { "true" } else { "false" },
        )?;

        let checklist = serde_json::to_string(&day.checklist).map_err(|e| {
            AppError::MalformedValue {
                key: training_key(TRAINING_CHECKLIST_PREFIX, date),
                message: e.to_string(),
            }
        })?;
        storage::set(conn, &training_key(TRAINING_CHECKLIST_PREFIX, date), &checklist)?;
        Ok(())
    }

    // ---------------------------
    // Equipment
    // ---------------------------

    pub fn load_gear(&self) -> AppResult<Vec<GearItem>> {
        let map: Option<serde_json::Map<String, serde_json::Value>> =
            self.load_json(StorageKey::Gear)?;

        let Some(map) = map else {
            return Ok(default_gear());
        };

        let mut items = Vec::with_capacity(map.len());
        for (key, value) in map {
            match serde_json::from_value::<GearEntry>(value) {
                Ok(entry) => items.push(GearItem {
                    key,
                    label: entry.label,
                    checked: entry.checked,
                }),
                Err(e) => warning(format!("Ignoring malformed gear item '{key}': {e}")),
            }
        }
        Ok(items)
    }

    pub fn save_gear(&self, items: &[GearItem]) -> AppResult<()> {
        let mut map = serde_json::Map::new();
        for item in items {
            let entry = GearEntry {
                label: item.label.clone(),
                checked: item.checked,
            };
            let value = serde_json::to_value(entry).map_err(|e| AppError::MalformedValue {
                key: StorageKey::Gear.as_str().into(),
                message: e.to_string(),
            })?;
            map.insert(item.key.clone(), value);
        }
        self.save_json(StorageKey::Gear, &map)
    }

    // ---------------------------
    // Reset
    // ---------------------------

    /// Delete every stored key. Irreversible.
    pub fn reset(&self) -> AppResult<usize> {
        let removed = storage::clear(self.conn())?;
        self.audit("reset", "", &format!("Removed {removed} stored keys"));
        Ok(removed)
    }

    // ---------------------------
    // JSON helpers
    // ---------------------------

    fn load_json<T: DeserializeOwned>(&self, key: StorageKey) -> AppResult<Option<T>> {
        let Some(raw) = storage::get(self.conn(), key.as_str())? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                warning(format!(
                    "Malformed value for '{}' ({e}); using the default.",
                    key.as_str()
                ));
                self.keep_corrupt_copy(key, &raw)?;
                Ok(None)
            }
        }
    }

    /// Park an unreadable raw value under `<key>_corrupt` so the next save
    /// of `key` does not lose it.
    fn keep_corrupt_copy(&self, key: StorageKey, raw: &str) -> AppResult<()> {
        let backup = corrupt_key(key);
        if storage::get(self.conn(), &backup)?.as_deref() == Some(raw) {
            return Ok(());
        }

        storage::set(self.conn(), &backup, raw)?;
        self.audit(
            "corrupt_value",
            key.as_str(),
            &format!("Unreadable value copied to '{backup}'"),
        );
        warning(format!("The unreadable value was kept under '{backup}'."));
        Ok(())
    }

    fn load_json_or_default<T: DeserializeOwned + Default>(&self, key: StorageKey) -> AppResult<T> {
        Ok(self.load_json(key)?.unwrap_or_default())
    }

    fn save_json<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| AppError::MalformedValue {
            key: key.as_str().to_string(),
            message: e.to_string(),
        })?;
        storage::set(self.conn(), key.as_str(), &raw)
    }
}

pub fn corrupt_key(key: StorageKey) -> String {
    format!("{}_corrupt", key.as_str())
}

pub fn training_key(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}{}", date.format(TRAINING_KEY_DATE_FORMAT))
}

fn parse_training_key(key: &str, prefix: &str) -> Option<NaiveDate> {
    key.strip_prefix(prefix)
        .and_then(|d| NaiveDate::parse_from_str(d, TRAINING_KEY_DATE_FORMAT).ok())
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

/// Numeric settings: missing, unparsable or zero values fall back to the default.
fn parse_number(v: Option<String>) -> Option<f64> {
    v.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AppStore {
        AppStore::from_pool(DbPool::in_memory().unwrap()).unwrap()
    }

    #[test]
    fn training_key_uses_day_month_year() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(
            training_key(TRAINING_COMPLETE_PREFIX, d),
            "myGrowthApp_training_complete_07/03/2026"
        );
    }

    #[test]
    fn numeric_settings_fall_back_on_zero_or_garbage() {
        let s = store();
        storage::set(s.conn(), StorageKey::ShiftRate.as_str(), "0").unwrap();
        storage::set(s.conn(), StorageKey::SavingsGoal.as_str(), "lots").unwrap();

        let settings = s.load_settings().unwrap();
        assert_eq!(settings.shift_rate, DEFAULT_SHIFT_RATE);
        assert_eq!(settings.savings_goal, DEFAULT_SAVINGS_GOAL);
    }

    #[test]
    fn malformed_ledger_loads_empty() {
        let s = store();
        storage::set(s.conn(), StorageKey::Trips.as_str(), "{not json").unwrap();
        assert!(s.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn malformed_ledger_is_kept_before_overwrite() {
        let s = store();
        storage::set(s.conn(), StorageKey::Trips.as_str(), "{not json").unwrap();

        let mut ledger = s.load_ledger().unwrap();
        let d = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        ledger.add(ShiftRecord::new(d, 8.0, false, "")).unwrap();
        s.save_ledger(&ledger).unwrap();

        let backup = corrupt_key(StorageKey::Trips);
        assert_eq!(backup, "myGrowthApp_trips_corrupt");
        assert_eq!(
            storage::get(s.conn(), &backup).unwrap().as_deref(),
            Some("{not json")
        );
        assert_eq!(s.load_ledger().unwrap().len(), 1);

        let logged = log::read_all(s.conn()).unwrap();
        assert_eq!(
            logged.iter().filter(|e| e.operation == "corrupt_value").count(),
            1
        );
    }

    #[test]
    fn gear_defaults_when_absent() {
        let s = store();
        let gear = s.load_gear().unwrap();
        assert_eq!(gear.len(), 10);
        assert_eq!(gear[0].key, "gun");
        assert!(gear.iter().all(|g| !g.checked));
    }
}
