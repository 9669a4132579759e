use crate::core::earnings::DashboardSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: String,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// Badge list evaluated against the dashboard figures.
pub fn badges(summary: &DashboardSummary) -> Vec<Badge> {
    let earned = summary.goal_earned;

    vec![
        Badge {
            id: "first10k",
            title: "First step",
            description: "Earned over ₪10,000".into(),
            icon: "🥉",
            unlocked: earned >= 10_000.0,
        },
        Badge {
            id: "overtime",
            title: "King of hours",
            description: "10 shifts with overtime".into(),
            icon: "⚡",
            unlocked: summary.overtime_count >= 10,
        },
        Badge {
            id: "halfway",
            title: "Halfway there",
            description: "Reached ₪25,000".into(),
            icon: "🥈",
            unlocked: earned >= 25_000.0,
        },
        Badge {
            id: "century",
            title: "The 100 club",
            description: "Completed 100 shifts".into(),
            icon: "💯",
            unlocked: summary.shift_count >= 100,
        },
        Badge {
            id: "mission",
            title: "Mission complete",
            description: format!("Savings goal of ₪{:.0} reached", summary.savings_goal),
            icon: "🏆",
            unlocked: summary.goal_reached(),
        },
    ]
}
