use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::earnings::total_earnings;
use crate::core::store::AppStore;
use crate::errors::AppResult;
use crate::core::ledger::gross_pay;
use crate::utils::colors::{RESET, color_for_pay};
use crate::utils::formatting::{hours, money, truncate};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all } = cmd {
        let store = AppStore::open(&cfg.database)?;
        let settings = store.load_settings()?;
        let ledger = store.load_ledger()?;
        let rules = cfg.pay_rules();

        let mut shifts = if *all {
            ledger.into_records()
        } else {
            ledger.filter_since(settings.start_date)
        };

        if shifts.is_empty() {
            println!("No shifts logged yet.");
            return Ok(());
        }

        // newest first
        shifts.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        let mut table = Table::with_headers(&["ID", "Date", "Day", "Hours", "Night", "Pay", "Notes"]);
        let mut colors = Vec::with_capacity(shifts.len());

        for s in &shifts {
            let pay = gross_pay(s, settings.shift_rate, &rules);
            colors.push(color_for_pay(pay, settings.shift_rate));
            table.add_row(vec![
                s.id.to_string(),
                s.date_str(),
                s.date.format("%a").to_string(),
                hours(s.hours),
                if s.is_sleepover { "🌙".into() } else { String::new() },
                money(pay),
                truncate(&s.notes.replace('\n', " "), 40),
            ]);
        }

        for (i, line) in table.render().lines().enumerate() {
            match i.checked_sub(2).and_then(|r| colors.get(r)) {
                Some(color) => println!("{color}{line}{RESET}"),
                None => println!("{line}"),
            }
        }

        println!(
            "\n{} shifts, {} total",
            shifts.len(),
            money(total_earnings(&shifts, settings.shift_rate, &rules))
        );
    }

    Ok(())
}
