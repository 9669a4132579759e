//! Derived aggregates over the shift ledger: totals, goal progress, streak.

use crate::core::ledger::{PayRules, gross_pay};
use crate::models::shift::ShiftRecord;
use chrono::{Datelike, Duration, NaiveDate};

/// Sum of gross pay over all given records ("all-time" figure).
pub fn total_earnings(records: &[ShiftRecord], base_rate: f64, rules: &PayRules) -> f64 {
    records.iter().map(|r| gross_pay(r, base_rate, rules)).sum()
}

/// Sum of gross pay over records dated on or after `goal_start`.
///
/// Callers pass records already scoped to the journey start date; the goal
/// cutoff is a second, independent filter on top of that.
pub fn goal_earnings(
    records: &[ShiftRecord],
    base_rate: f64,
    rules: &PayRules,
    goal_start: NaiveDate,
) -> f64 {
    records
        .iter()
        .filter(|r| r.date >= goal_start)
        .map(|r| gross_pay(r, base_rate, rules))
        .sum()
}

pub fn overtime_count(records: &[ShiftRecord], rules: &PayRules) -> usize {
    records.iter().filter(|r| rules.is_overtime(r)).count()
}

/// Length of the run of consecutive activity days anchored at the most
/// recent activity, provided that activity is today or yesterday.
pub fn streak<I>(activity_dates: I, today: NaiveDate) -> usize
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut dates: Vec<NaiveDate> = activity_dates.into_iter().filter(|d| *d <= today).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let Some(&latest) = dates.first() else {
        return 0;
    };

    if (today - latest).num_days() > 1 {
        return 0;
    }

    let mut count = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() != 1 {
            break;
        }
        count += 1;
    }
    count
}

/// Values shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub days_until_start: i64,
    pub goal_earned: f64,
    pub total_earned: f64,
    pub savings_goal: f64,
    pub progress_pct: f64,
    pub remaining: f64,
    pub shifts_left: u64,
    pub today_gross: f64,
    pub shift_count: usize,
    pub overtime_count: usize,
    pub streak: usize,
}

/// Inputs of `DashboardSummary::build`.
pub struct DashboardInput<'a> {
    pub journey: &'a [ShiftRecord],
    pub base_rate: f64,
    pub rules: &'a PayRules,
    pub start_date: NaiveDate,
    pub goal_start: NaiveDate,
    pub savings_goal: f64,
    pub training_days: &'a [NaiveDate],
    pub today: NaiveDate,
}

impl DashboardSummary {
    pub fn build(input: &DashboardInput<'_>) -> Self {
        let goal_earned = goal_earnings(input.journey, input.base_rate, input.rules, input.goal_start);
        let total_earned = total_earnings(input.journey, input.base_rate, input.rules);
        let remaining = (input.savings_goal - goal_earned).max(0.0);

        let shifts_left = if input.base_rate > 0.0 {
            (remaining / input.base_rate).ceil() as u64
        } else {
            0
        };

        let today_gross = input
            .journey
            .iter()
            .filter(|r| r.date == input.today)
            .map(|r| gross_pay(r, input.base_rate, input.rules))
            .sum();

        let activity = input
            .journey
            .iter()
            .map(|r| r.date)
            .chain(input.training_days.iter().copied());

        Self {
            days_until_start: (input.start_date - input.today).num_days(),
            goal_earned,
            total_earned,
            savings_goal: input.savings_goal,
            progress_pct: progress_pct(goal_earned, input.savings_goal),
            remaining,
            shifts_left,
            today_gross,
            shift_count: input.journey.len(),
            overtime_count: overtime_count(input.journey, input.rules),
            streak: streak(activity, input.today),
        }
    }

    pub fn is_started(&self) -> bool {
        self.days_until_start <= 0
    }

    pub fn goal_reached(&self) -> bool {
        self.savings_goal > 0.0 && self.goal_earned >= self.savings_goal
    }
}

/// Percentage of `goal` covered by `earned`, capped at 100.
pub fn progress_pct(earned: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 100.0;
    }
    (earned / goal * 100.0).min(100.0)
}

/// Sunday..Saturday week containing `today`.
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    (start, start + Duration::days(6))
}

/// Shareable weekly recap.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub shift_count: usize,
    pub hours: f64,
    pub gross: f64,
    pub net: f64,
    pub goal_progress_pct: f64,
}

impl WeeklySummary {
    pub fn build(
        journey: &[ShiftRecord],
        base_rate: f64,
        rules: &PayRules,
        net_ratio: f64,
        goal_progress_pct: f64,
        today: NaiveDate,
    ) -> Self {
        let (week_start, week_end) = week_bounds(today);
        let week: Vec<&ShiftRecord> = journey
            .iter()
            .filter(|r| r.date >= week_start && r.date <= week_end)
            .collect();

        let gross: f64 = week.iter().map(|r| gross_pay(r, base_rate, rules)).sum();

        Self {
            week_start,
            week_end,
            shift_count: week.len(),
            hours: week.iter().map(|r| r.hours).sum(),
            gross,
            net: gross * net_ratio,
            goal_progress_pct,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Weekly recap - Vibe 🚀\n📅 Week: {} - {}\n💰 Net saved this week: ₪{:.0}\n🛣️ Shifts done: {}\n⏱️ Hours: {:.2}\n🎯 Goal progress: {:.1}%\nKeep going!",
            self.week_start.format("%d.%m.%Y"),
            self.week_end.format("%d.%m.%Y"),
            self.net,
            self.shift_count,
            self.hours,
            self.goal_progress_pct
        )
    }
}
