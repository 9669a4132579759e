use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, ShiftInput};
use crate::core::store::AppStore;
use crate::errors::{AppError, AppResult};
use crate::ui::feedback::TerminalFeedback;
use crate::utils::date;

/// Log a new shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        hours,
        sleepover,
        notes,
    } = cmd
    {
        let d = date::parse_or_today(date.as_ref())
            .ok_or_else(|| AppError::InvalidDate(date.clone().unwrap_or_default()))?;

        let store = AppStore::open(&cfg.database)?;
        let feedback = TerminalFeedback::new(store.load_settings()?.sound_enabled);

        let input = ShiftInput {
            date: Some(d),
            hours: *hours,
            is_sleepover: *sleepover,
            notes: notes.clone(),
        };

        AddLogic::apply(&store, cfg, input, &feedback)?;
    }

    Ok(())
}
