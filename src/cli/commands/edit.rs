use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::store::AppStore;
use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftPatch;
use crate::ui::feedback::TerminalFeedback;
use crate::utils::date;

/// Change fields of an existing shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        hours,
        sleepover,
        no_sleepover,
        notes,
    } = cmd
    {
        let date = match date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let is_sleepover = if *sleepover {
            Some(true)
        } else if *no_sleepover {
            Some(false)
        } else {
            None
        };

        let patch = ShiftPatch {
            date,
            hours: *hours,
            is_sleepover,
            notes: notes.clone(),
        };

        let store = AppStore::open(&cfg.database)?;
        let feedback = TerminalFeedback::new(store.load_settings()?.sound_enabled);
        AddLogic::edit(&store, cfg, *id, &patch, &feedback)?;
    }

    Ok(())
}
