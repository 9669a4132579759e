use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::event_log::group_by_date;
use crate::core::store::AppStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date::{self, display_date};
use crate::utils::time::{now_hhmm, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Event {
        text,
        date,
        time,
        list,
        share,
    } = cmd
    {
        let store = AppStore::open(&cfg.database)?;
        let day = date::parse_or_today(date.as_ref())
            .ok_or_else(|| AppError::InvalidDate(date.clone().unwrap_or_default()))?;

        if let Some(text) = text {
            let time = match parse_optional_time(time.as_ref())? {
                Some(t) => t.format("%H:%M").to_string(),
                None => now_hhmm(),
            };

            let mut log = store.load_events()?;
            let ev = log.add(day, &time, text)?.clone();
            store.save_events(&log)?;
            store.audit("event", &ev.date_str(), &ev.text);
            success(format!("Event saved for {} at {}.", display_date(ev.date), ev.time));
        }

        // no action given: list
        if *list || (text.is_none() && !*share) {
            let log = store.load_events()?;
            let groups = group_by_date(log.events());
            let groups: Vec<_> = match date {
                Some(_) => groups.into_iter().filter(|(d, _)| *d == day).collect(),
                None => groups,
            };

            if groups.is_empty() {
                info("No events recorded.");
            }
            for (d, events) in groups {
                println!("{CYAN}📅 {} ({}){RESET}", display_date(d), date::weekday_name(d));
                for ev in events {
                    println!("  {GREY}{}{RESET}  {}", ev.time, ev.text);
                }
            }
        }

        if *share {
            match store.load_events()?.share_text(day) {
                Some(text) => println!("{text}"),
                None => info(format!("No events on {}.", display_date(day))),
            }
        }
    }

    Ok(())
}
