//! Hard-coded calendar windows checked before a shift is accepted.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Fail with `VacationDay` when `date` falls inside the vacation window.
pub fn ensure_not_vacation(vacation: &DateWindow, date: NaiveDate) -> AppResult<()> {
    if vacation.contains(date) {
        return Err(AppError::VacationDay {
            start: vacation.start.to_string(),
            end: vacation.end.to_string(),
        });
    }
    Ok(())
}
