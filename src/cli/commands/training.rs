use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AppStore;
use crate::core::training::TrainingLogic;
use crate::errors::{AppError, AppResult};
use crate::core::hooks::FeedbackHooks;
use crate::models::training::{FBW_EXERCISES, WorkoutKind};
use crate::ui::feedback::TerminalFeedback;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{GREEN, RESET, checkbox};
use crate::utils::date::{self, display_date};
use chrono::{Local, Weekday};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Training {
        date,
        check,
        done,
        schedule,
    } = cmd
    {
        if *schedule {
            print_schedule();
            return Ok(());
        }

        let day_date = date::parse_or_today(date.as_ref())
            .ok_or_else(|| AppError::InvalidDate(date.clone().unwrap_or_default()))?;
        let kind = WorkoutKind::for_date(day_date);

        let store = AppStore::open(&cfg.database)?;
        let settings = store.load_settings()?;
        let mut day = store.load_training_day(day_date)?;

        if let Some(item) = check {
            if kind != WorkoutKind::Strength {
                warning(format!("{} has no strength checklist.", display_date(day_date)));
            }
            TrainingLogic::toggle_item(&mut day, item)?;
            store.save_training_day(day_date, &day)?;
        }

        if *done {
            let completed = TrainingLogic::toggle_complete(&mut day);
            store.save_training_day(day_date, &day)?;
            store.audit(
                "training",
                &day_date.to_string(),
                if completed { "completed" } else { "reopened" },
            );
            if completed {
                TerminalFeedback::new(settings.sound_enabled).on_training_completed();
            }
        }

        header(format!(
            "{} {} - {} ({})",
            kind.icon(),
            kind.title(),
            date::weekday_name(day_date),
            display_date(day_date)
        ));

        if kind == WorkoutKind::Strength {
            for (id, label) in FBW_EXERCISES {
                println!("  {} {:<8} {}", checkbox(day.is_checked(id)), id, label);
            }
            println!();
        }

        if day.completed {
            println!("{GREEN}✔ Workout completed.{RESET}");
        } else if kind.is_rest() {
            info("Rest day. Recover well.");
        } else if day_date == date::today()
            && TrainingLogic::reminder_due(day_date, &day, Local::now().time(), settings.workout_time)
        {
            warning(format!(
                "Workout time ({}) has passed. Mark it with --done when finished.",
                settings.workout_time.format("%H:%M")
            ));
        }
    }

    Ok(())
}

fn print_schedule() {
    header("Weekly training plan");
    let week = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];
    for wd in week {
        let kind = WorkoutKind::for_weekday(wd);
        println!("  {:<4} {} {}", wd.to_string(), kind.icon(), kind.title());
    }
}
