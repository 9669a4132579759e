use crate::errors::{AppError, AppResult};
use crate::models::training::{FBW_EXERCISES, TrainingDay, TrainingLog, WorkoutKind};
use chrono::{NaiveDate, NaiveTime};

pub struct TrainingLogic;

impl TrainingLogic {
    /// Flip one strength-day checklist item. Returns the new state.
    pub fn toggle_item(day: &mut TrainingDay, item: &str) -> AppResult<bool> {
        if !FBW_EXERCISES.iter().any(|(id, _)| *id == item) {
            return Err(AppError::UnknownItem(item.to_string()));
        }

        let entry = day.checklist.entry(item.to_string()).or_insert(false);
        *entry = !*entry;
        Ok(*entry)
    }

    /// Flip the completion flag. Returns the new state.
    pub fn toggle_complete(day: &mut TrainingDay) -> bool {
        day.completed = !day.completed;
        day.completed
    }

    /// A reminder is due on a training day that is not done yet, once the
    /// configured workout time has passed.
    pub fn reminder_due(
        date: NaiveDate,
        day: &TrainingDay,
        now: NaiveTime,
        workout_time: NaiveTime,
    ) -> bool {
        !WorkoutKind::for_date(date).is_rest() && !day.completed && now >= workout_time
    }

    /// Dates with a completed training, used as streak activity.
    pub fn completed_dates(log: &TrainingLog) -> Vec<NaiveDate> {
        log.iter()
            .filter(|(_, day)| day.completed)
            .map(|(date, _)| *date)
            .collect()
    }
}
