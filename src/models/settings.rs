use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Enumerated key namespace of the persistent store.
///
/// The string forms are the exact keys used by existing saved data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    UserName,
    EmployeeId,
    StartDate,
    SavingsGoal,
    ShiftRate,
    WorkoutTime,
    SoundEnabled,
    Trips,
    Events,
    Gear,
}

/// Prefix of the per-day training completion flag keys.
pub const TRAINING_COMPLETE_PREFIX: &str = "myGrowthApp_training_complete_";
/// Prefix of the per-day training checklist keys.
pub const TRAINING_CHECKLIST_PREFIX: &str = "myGrowthApp_training_checklist_";

impl StorageKey {
    pub const ALL: [StorageKey; 10] = [
        StorageKey::UserName,
        StorageKey::EmployeeId,
        StorageKey::StartDate,
        StorageKey::SavingsGoal,
        StorageKey::ShiftRate,
        StorageKey::WorkoutTime,
        StorageKey::SoundEnabled,
        StorageKey::Trips,
        StorageKey::Events,
        StorageKey::Gear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::UserName => "myGrowthApp_userName",
            StorageKey::EmployeeId => "myGrowthApp_employeeId",
            StorageKey::StartDate => "myGrowthApp_startDate",
            StorageKey::SavingsGoal => "myGrowthApp_savingsGoal",
            StorageKey::ShiftRate => "myGrowthApp_shiftRate",
            StorageKey::WorkoutTime => "myGrowthApp_workoutTime",
            StorageKey::SoundEnabled => "myGrowthApp_soundEnabled",
            StorageKey::Trips => "myGrowthApp_trips",
            StorageKey::Events => "myGrowthApp_events",
            StorageKey::Gear => "myGrowthApp_gear",
        }
    }

    /// Key under which older versions stored the same value.
    pub fn legacy(&self) -> &'static str {
        match self {
            StorageKey::UserName => "userName",
            StorageKey::EmployeeId => "employeeId",
            StorageKey::StartDate => "startDate",
            StorageKey::SavingsGoal => "savingsGoal",
            StorageKey::ShiftRate => "shiftRate",
            StorageKey::WorkoutTime => "workoutTime",
            StorageKey::SoundEnabled => "soundEnabled",
            StorageKey::Trips => "trips",
            StorageKey::Events => "dailyEvents",
            StorageKey::Gear => "gear",
        }
    }
}

pub const DEFAULT_USER_NAME: &str = "עמית שני";
pub const DEFAULT_SAVINGS_GOAL: f64 = 50_000.0;
pub const DEFAULT_SHIFT_RATE: f64 = 400.0;

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 1).unwrap_or_default()
}

pub fn default_workout_time() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 0, 0).unwrap_or_default()
}

/// User-facing settings held in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub user_name: String,
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub savings_goal: f64,
    pub shift_rate: f64,
    pub workout_time: NaiveTime,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            employee_id: String::new(),
            start_date: default_start_date(),
            savings_goal: DEFAULT_SAVINGS_GOAL,
            shift_rate: DEFAULT_SHIFT_RATE,
            workout_time: default_workout_time(),
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// First whitespace-separated token of the display name, used in file names.
    pub fn first_name(&self) -> &str {
        self.user_name.split(' ').next().unwrap_or("")
    }
}
