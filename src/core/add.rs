use crate::config::Config;
use crate::core::calendar::ensure_not_vacation;
use crate::core::earnings::goal_earnings;
use crate::core::hooks::FeedbackHooks;
use crate::core::ledger::{ShiftLedger, gross_pay};
use crate::core::store::AppStore;
use crate::errors::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::models::shift::{COURSE_WEEK_NOTE, ShiftPatch, ShiftRecord};
use crate::ui::messages::{info, success};
use chrono::NaiveDate;

/// What the user asked to add; unset fields may be filled by calendar rules.
#[derive(Debug, Clone, Default)]
pub struct ShiftInput {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub is_sleepover: bool,
    pub notes: Option<String>,
}

/// High-level business logic for adding and editing shifts.
pub struct AddLogic;

impl AddLogic {
    /// Validate `input` against the calendar rules and append it to the ledger.
    pub fn apply(
        store: &AppStore,
        cfg: &Config,
        input: ShiftInput,
        hooks: &dyn FeedbackHooks,
    ) -> AppResult<ShiftRecord> {
        let date = input.date.ok_or(AppError::MissingDate)?;
        ensure_not_vacation(&cfg.vacation, date)?;

        let (hours, notes) = if cfg.course_week.contains(date) {
            if input.hours.is_none() {
                info("📅 Course week: hours default to 0.");
            }
            (
                input.hours.unwrap_or(0.0),
                input.notes.unwrap_or_else(|| COURSE_WEEK_NOTE.to_string()),
            )
        } else {
            let hours = input
                .hours
                .ok_or_else(|| AppError::InvalidHours("hours are required".into()))?;
            (hours, input.notes.unwrap_or_default())
        };

        validate_hours(hours)?;

        let settings = store.load_settings()?;
        let mut ledger = store.load_ledger()?;
        let before = journey_goal_total(&ledger, &settings, cfg);

        let id = ledger.add(ShiftRecord::new(date, hours, input.is_sleepover, notes))?;
        store.save_ledger(&ledger)?;

        let record = ledger
            .get(id)
            .cloned()
            .ok_or(AppError::ShiftNotFound(id))?;
        let pay = gross_pay(&record, settings.shift_rate, &cfg.pay_rules());

        store.audit(
            "add",
            &id.to_string(),
            &format!("{} {}h pay={pay:.2}", record.date_str(), record.hours),
        );
        success(format!(
            "Added shift #{} on {}: {}h → ₪{:.2}",
            id,
            record.date_str(),
            record.hours,
            pay
        ));

        hooks.on_shift_saved(&record, pay);
        notify_goal(&ledger, &settings, cfg, before, hooks);

        Ok(record)
    }

    /// Apply `patch` to the shift with `id`.
    pub fn edit(
        store: &AppStore,
        cfg: &Config,
        id: i64,
        patch: &ShiftPatch,
        hooks: &dyn FeedbackHooks,
    ) -> AppResult<ShiftRecord> {
        if patch.is_empty() {
            return Err(AppError::InvalidHours(
                "Nothing to do: specify at least one field to change.".into(),
            ));
        }
        if let Some(d) = patch.date {
            ensure_not_vacation(&cfg.vacation, d)?;
        }
        if let Some(h) = patch.hours {
            validate_hours(h)?;
        }

        let settings = store.load_settings()?;
        let mut ledger = store.load_ledger()?;
        let before = journey_goal_total(&ledger, &settings, cfg);

        let record = ledger.update(id, patch)?.clone();
        store.save_ledger(&ledger)?;

        store.audit("edit", &id.to_string(), &format!("{patch:?}"));
        success(format!("✏️ Shift #{} updated.", id));

        notify_goal(&ledger, &settings, cfg, before, hooks);
        Ok(record)
    }
}

fn validate_hours(hours: f64) -> AppResult<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(AppError::InvalidHours(hours.to_string()));
    }
    Ok(())
}

fn journey_goal_total(ledger: &ShiftLedger, settings: &Settings, cfg: &Config) -> f64 {
    goal_earnings(
        &ledger.filter_since(settings.start_date),
        settings.shift_rate,
        &cfg.pay_rules(),
        cfg.goal_start_date,
    )
}

fn notify_goal(
    ledger: &ShiftLedger,
    settings: &Settings,
    cfg: &Config,
    before: f64,
    hooks: &dyn FeedbackHooks,
) {
    let after = journey_goal_total(ledger, settings, cfg);
    if before < settings.savings_goal && after >= settings.savings_goal {
        hooks.on_goal_reached(settings.savings_goal);
    }
}
