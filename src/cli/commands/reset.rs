use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AppStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes
            && !ask_confirmation(
                "Delete ALL shifts, events, training data and settings? This cannot be undone.",
            )
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = AppStore::open(&cfg.database)?;
        let removed = store.reset()?;
        success(format!("Store cleared ({removed} keys removed)."));
    }

    Ok(())
}
