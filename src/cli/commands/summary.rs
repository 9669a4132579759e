use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::achievements::badges;
use crate::core::earnings::{DashboardInput, DashboardSummary, WeeklySummary};
use crate::core::store::AppStore;
use crate::core::training::TrainingLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::{display_date, today};
use crate::utils::formatting::money;
use chrono::Local;

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { week, badges: show_badges } = cmd {
        let store = AppStore::open(&cfg.database)?;
        let settings = store.load_settings()?;
        let ledger = store.load_ledger()?;
        let training = store.load_training()?;
        let rules = cfg.pay_rules();
        let today = today();

        let journey = ledger.filter_since(settings.start_date);
        let training_days = TrainingLogic::completed_dates(&training);

        let summary = DashboardSummary::build(&DashboardInput {
            journey: &journey,
            base_rate: settings.shift_rate,
            rules: &rules,
            start_date: settings.start_date,
            goal_start: cfg.goal_start_date,
            savings_goal: settings.savings_goal,
            training_days: &training_days,
            today,
        });

        header(format!("Hello {} 👋", settings.first_name()));

        if !summary.is_started() {
            println!(
                "⏳ {}{}{} days until the journey starts ({})\n",
                YELLOW,
                summary.days_until_start,
                RESET,
                display_date(settings.start_date)
            );
        }

        println!(
            "🎯 Goal      : {} / {} ({:.1}%)",
            money(summary.goal_earned),
            money(summary.savings_goal),
            summary.progress_pct
        );
        println!("   {}", progress_bar(summary.progress_pct));
        println!(
            "💸 Remaining : {} (~{} shifts)",
            money(summary.remaining),
            summary.shifts_left
        );
        println!("💰 Earned    : {}", money(summary.total_earned));
        println!("📆 Today     : {}", money(summary.today_gross));
        println!(
            "🛣️  Shifts    : {} ({} with overtime)",
            summary.shift_count, summary.overtime_count
        );
        println!("🔥 Streak    : {} days", summary.streak);

        let day = training.get(&today).cloned().unwrap_or_default();
        if TrainingLogic::reminder_due(today, &day, Local::now().time(), settings.workout_time) {
            warning("Today's workout is still open. Run `vibelog training`.");
        }

        if *week {
            let weekly = WeeklySummary::build(
                &journey,
                settings.shift_rate,
                &rules,
                cfg.net_ratio,
                summary.progress_pct,
                today,
            );
            println!("\n{}", weekly.message());
        }

        if *show_badges {
            println!("\n{CYAN}Achievements{RESET}");
            for b in badges(&summary) {
                if b.unlocked {
                    println!("  {} {GREEN}{}{RESET} - {}", b.icon, b.title, b.description);
                } else {
                    println!("  🔒 {GREY}{} - {}{RESET}", b.title, b.description);
                }
            }
        }
    }

    Ok(())
}

fn progress_bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "{GREEN}{}{GREY}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}
