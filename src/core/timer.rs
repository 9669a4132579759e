use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local};

/// Stopwatch for a shift in progress. Nothing is stored until the caller
/// turns the stopped duration into a `ShiftRecord`.
#[derive(Debug, Default)]
pub struct ShiftTimer {
    started_at: Option<DateTime<Local>>,
}

impl ShiftTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn start(&mut self, now: DateTime<Local>) -> AppResult<()> {
        if self.started_at.is_some() {
            return Err(AppError::Timer("shift timer is already running".into()));
        }
        self.started_at = Some(now);
        Ok(())
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn elapsed(&self, now: DateTime<Local>) -> Duration {
        self.started_at
            .map(|s| (now - s).max(Duration::zero()))
            .unwrap_or_else(Duration::zero)
    }

    /// Stop and return the worked hours rounded to two decimals.
    pub fn stop(&mut self, now: DateTime<Local>) -> AppResult<f64> {
        if self.started_at.is_none() {
            return Err(AppError::Timer("shift timer is not running".into()));
        }
        let hours = elapsed_hours(self.elapsed(now));
        self.started_at = None;
        Ok(hours)
    }

    /// Drop the running interval without producing a duration.
    pub fn discard(&mut self) {
        self.started_at = None;
    }
}

pub fn elapsed_hours(elapsed: Duration) -> f64 {
    let hours = elapsed.num_milliseconds() as f64 / 3_600_000.0;
    (hours * 100.0).round() / 100.0
}

/// `HH:MM:SS` rendering of the elapsed time.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_rounds_to_two_decimals() {
        let start = Local::now();
        let mut timer = ShiftTimer::new();
        timer.start(start).unwrap();
        assert!(timer.start(start).is_err());

        let hours = timer.stop(start + Duration::minutes(500)).unwrap();
        assert_eq!(hours, 8.33);
        assert!(!timer.is_running());
        assert!(timer.stop(start).is_err());
    }

    #[test]
    fn elapsed_is_rendered_as_clock() {
        assert_eq!(format_elapsed(Duration::seconds(3723)), "01:02:03");
        assert_eq!(format_elapsed(Duration::zero()), "00:00:00");
    }
}
