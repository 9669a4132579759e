use crate::models::shift::ShiftRecord;

/// Presentation side effects (sound, haptics, celebrations) triggered by
/// callers after a state change. All methods default to no-ops.
pub trait FeedbackHooks {
    fn on_shift_saved(&self, _record: &ShiftRecord, _pay: f64) {}
    fn on_training_completed(&self) {}
    fn on_goal_reached(&self, _goal: f64) {}
}

/// Hooks that do nothing.
pub struct NoFeedback;

impl FeedbackHooks for NoFeedback {}
