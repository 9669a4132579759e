//! Terminal rendition of the app's feedback events.

use crate::core::hooks::FeedbackHooks;
use crate::models::shift::ShiftRecord;
use crate::utils::colors::{MAGENTA, RESET};
use crate::utils::formatting::money;
use std::io::{self, Write};

/// Rings the terminal bell when sound is enabled and prints a short
/// celebration line for milestones.
pub struct TerminalFeedback {
    pub sound: bool,
}

impl TerminalFeedback {
    pub fn new(sound: bool) -> Self {
        Self { sound }
    }

    fn bell(&self) {
        if self.sound {
            print!("\x07");
            io::stdout().flush().ok();
        }
    }
}

impl FeedbackHooks for TerminalFeedback {
    fn on_shift_saved(&self, _record: &ShiftRecord, _pay: f64) {
        self.bell();
    }

    fn on_training_completed(&self) {
        self.bell();
        println!("{MAGENTA}🎉 Workout done. Keep the streak going!{RESET}");
    }

    fn on_goal_reached(&self, goal: f64) {
        self.bell();
        println!("{MAGENTA}🏆🎊 Savings goal of {} reached! 🎊🏆{RESET}", money(goal));
    }
}
