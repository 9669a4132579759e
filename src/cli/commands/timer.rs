use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, ShiftInput};
use crate::core::calendar::ensure_not_vacation;
use crate::core::store::AppStore;
use crate::core::timer::{ShiftTimer, format_elapsed};
use crate::errors::{AppError, AppResult};
use crate::ui::feedback::TerminalFeedback;
use crate::ui::messages::{info, success};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::{parse_date, today};
use chrono::Local;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Run a live stopwatch until Enter, then optionally save it as a shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Timer) {
        return Ok(());
    }

    ensure_not_vacation(&cfg.vacation, today())?;

    let store = AppStore::open(&cfg.database)?;
    let mut timer = ShiftTimer::new();
    timer.start(Local::now())?;

    let started = timer
        .started_at()
        .ok_or_else(|| AppError::Timer("timer did not start".into()))?;
    success(format!(
        "Shift started at {}. Press Enter to stop.",
        started.format("%H:%M")
    ));

    let running = Arc::new(AtomicBool::new(true));
    let ticker = {
        let running = Arc::clone(&running);
        thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                let elapsed = Local::now() - started;
                print!("\r{CYAN}⏱  {}{RESET}", format_elapsed(elapsed));
                io::stdout().flush().ok();
                thread::sleep(Duration::from_secs(1));
            }
        })
    };

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line);
    running.store(false, Ordering::Relaxed);
    ticker.join().ok();
    println!();
    if let Err(e) = read {
        timer.discard();
        return Err(e.into());
    }

    let hours = timer.stop(Local::now())?;
    info(format!("Shift length: {hours}h"));

    if !ask_confirmation("Save this shift?") {
        info("Shift discarded.");
        return Ok(());
    }

    print!("Date [YYYY-MM-DD, Enter = today]: ");
    io::stdout().flush().ok();
    let mut date_line = String::new();
    io::stdin().read_line(&mut date_line)?;
    let date = match date_line.trim() {
        "" => today(),
        s => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
    };

    let feedback = TerminalFeedback::new(store.load_settings()?.sound_enabled);
    AddLogic::apply(
        &store,
        cfg,
        ShiftInput {
            date: Some(date),
            hours: Some(hours),
            is_sleepover: false,
            notes: None,
        },
        &feedback,
    )?;

    Ok(())
}
