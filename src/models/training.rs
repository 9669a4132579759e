use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Strength,
    Swim,
    Rest,
}

impl WorkoutKind {
    pub fn title(&self) -> &'static str {
        match self {
            WorkoutKind::Strength => "Strength (FBW)",
            WorkoutKind::Swim => "Swimming",
            WorkoutKind::Rest => "Rest",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Strength => "🏋️",
            WorkoutKind::Swim => "🏊",
            WorkoutKind::Rest => "🧘",
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, WorkoutKind::Rest)
    }

    /// Weekly plan: Sun/Tue/Fri strength, Mon/Wed swim, Thu/Sat rest.
    pub fn for_weekday(day: Weekday) -> Self {
        match day {
            Weekday::Sun | Weekday::Tue | Weekday::Fri => WorkoutKind::Strength,
            Weekday::Mon | Weekday::Wed => WorkoutKind::Swim,
            Weekday::Thu | Weekday::Sat => WorkoutKind::Rest,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_weekday(date.weekday())
    }
}

/// Strength-day checklist: (id, label).
pub const FBW_EXERCISES: [(&str, &str); 6] = [
    ("warmup", "חימום: 5 דקות סיבובי מפרקים"),
    ("squat", "סקוואט: 3 סטים של 12-15 חזרות"),
    ("pushups", "שכיבות סמיכה: 3 סטים של 10-12 חזרות"),
    ("pullups", "מתח/חתירה אוסטרלית: 3 סטים של 10 חזרות"),
    ("lunges", "מכרעים: 2 סטים של 10 לכל רגל"),
    ("plank", "בטן (פלאנק): 3 סטים של 45 שניות"),
];

/// Training state for a single calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingDay {
    pub completed: bool,
    pub checklist: BTreeMap<String, bool>,
}

impl TrainingDay {
    pub fn is_checked(&self, item: &str) -> bool {
        self.checklist.get(item).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        !self.completed && self.checklist.is_empty()
    }
}

/// Training history keyed by day.
pub type TrainingLog = BTreeMap<NaiveDate, TrainingDay>;
