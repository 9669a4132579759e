use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AppStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success};
use crate::utils::date::{display_date, parse_date};
use crate::utils::formatting::money;
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        name,
        employee_id,
        start_date,
        goal,
        rate,
        workout_time,
        sound,
    } = cmd
    {
        let store = AppStore::open(&cfg.database)?;
        let mut s = store.load_settings()?;
        let before = s.clone();

        if let Some(n) = name {
            if n.trim().is_empty() {
                return Err(AppError::InvalidSetting("name must not be empty".into()));
            }
            s.user_name = n.trim().to_string();
        }
        if let Some(id) = employee_id {
            s.employee_id = id.trim().to_string();
        }
        if let Some(d) = start_date {
            s.start_date = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
        }
        if let Some(g) = goal {
            s.savings_goal = non_negative("goal", *g)?;
        }
        if let Some(r) = rate {
            s.shift_rate = non_negative("rate", *r)?;
        }
        if let Some(t) = workout_time {
            s.workout_time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;
        }
        if let Some(on) = sound {
            s.sound_enabled = *on;
        }

        if s != before {
            store.save_settings(&s)?;
            store.audit("settings", "", "Settings updated");
            success("Settings saved.");
        }

        header("⚙️  Settings");
        println!("  Name         : {}", s.user_name);
        println!(
            "  Employee ID  : {}",
            if s.employee_id.is_empty() { "---" } else { s.employee_id.as_str() }
        );
        println!("  Start date   : {}", display_date(s.start_date));
        println!("  Savings goal : {}", money(s.savings_goal));
        println!("  Shift rate   : {}", money(s.shift_rate));
        println!("  Workout time : {}", s.workout_time.format("%H:%M"));
        println!("  Sound        : {}", if s.sound_enabled { "on" } else { "off" });
    }

    Ok(())
}

fn non_negative(field: &str, v: f64) -> AppResult<f64> {
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(AppError::InvalidSetting(format!("{field} must be a non-negative number")))
    }
}
