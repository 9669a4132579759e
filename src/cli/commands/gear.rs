use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::gear::GearLogic;
use crate::core::store::AppStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::checkbox;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gear {
        toggle,
        reset,
        check,
        yes,
    } = cmd
    {
        let store = AppStore::open(&cfg.database)?;
        let mut items = store.load_gear()?;

        if *reset {
            if !*yes && !ask_confirmation("Reset the equipment list to the defaults?") {
                info("Operation cancelled.");
                return Ok(());
            }
            items = GearLogic::reset();
            store.save_gear(&items)?;
            store.audit("gear", "", "Equipment list reset");
            success("Equipment list reset.");
        }

        if let Some(key) = toggle {
            GearLogic::toggle(&mut items, key)?;
            store.save_gear(&items)?;
        }

        header("🎒 Equipment");
        for item in &items {
            println!("  {} {:<11} {}", checkbox(item.checked), item.key, item.label);
        }
        println!();

        if GearLogic::all_checked(&items) {
            success("All set, ready for the shift!");
        } else if *check {
            let missing: Vec<&str> = GearLogic::missing(&items)
                .iter()
                .map(|i| i.key.as_str())
                .collect();
            return Err(AppError::Other(format!(
                "not ready, missing: {}",
                missing.join(", ")
            )));
        }
    }

    Ok(())
}
