use crate::cli::parser::Commands;
use crate::cli::commands::ask_confirmation;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::store::AppStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let store = AppStore::open(&cfg.database)?;

        let Some(shift) = store.load_ledger()?.get(*id).cloned() else {
            info(format!("No shift #{id}, nothing to delete."));
            return Ok(());
        };

        let prompt = format!(
            "Delete shift #{} ({}, {}h)? This action is irreversible.",
            id,
            shift.date_str(),
            shift.hours
        );

        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if DeleteLogic::apply(&store, *id)? {
            success(format!("Shift #{id} has been deleted."));
        }
    }

    Ok(())
}
