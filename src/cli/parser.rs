use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for vibelog
/// CLI application to track shifts, earnings and daily notes with SQLite
#[derive(Parser)]
#[command(
    name = "vibelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal shift and earnings tracker: log shifts, follow your savings goal, keep a daily event log",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the store (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending migrations and legacy key copies")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show store information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a shift
    Add {
        /// Date of the shift (YYYY-MM-DD, default: today)
        #[arg(long, short)]
        date: Option<String>,

        /// Hours worked (may be omitted inside the course week)
        #[arg(long = "hours", short = 'H')]
        hours: Option<f64>,

        /// The shift included a sleepover
        #[arg(long, short)]
        sleepover: bool,

        /// Free-text notes
        #[arg(long, short)]
        notes: Option<String>,
    },

    /// Change fields of a logged shift
    Edit {
        /// Shift id (see `list`)
        id: i64,

        #[arg(long, short)]
        date: Option<String>,

        #[arg(long = "hours", short = 'H')]
        hours: Option<f64>,

        #[arg(long, conflicts_with = "no_sleepover")]
        sleepover: bool,

        #[arg(long = "no-sleepover")]
        no_sleepover: bool,

        #[arg(long, short)]
        notes: Option<String>,
    },

    /// Delete a shift by id
    Del {
        /// Shift id (see `list`)
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List shifts (journey only unless --all)
    List {
        #[arg(long, help = "Include shifts dated before the start date")]
        all: bool,
    },

    /// Live shift timer; press Enter to stop
    Timer,

    /// Daily event log
    Event {
        /// Text of the event to add
        text: Option<String>,

        /// Day of the event (YYYY-MM-DD, default: today)
        #[arg(long, short)]
        date: Option<String>,

        /// Time label (HH:MM, default: now)
        #[arg(long, short)]
        time: Option<String>,

        #[arg(long, short, help = "List events grouped by day")]
        list: bool,

        #[arg(long, help = "Print the shareable text of a day")]
        share: bool,
    },

    /// Dashboard figures: earnings, goal progress, streak
    Summary {
        #[arg(long, help = "Print the weekly recap")]
        week: bool,

        #[arg(long, help = "Show achievement badges")]
        badges: bool,
    },

    /// Training plan for a day
    Training {
        /// Day to show (YYYY-MM-DD, default: today)
        #[arg(long, short)]
        date: Option<String>,

        #[arg(long, value_name = "ITEM", help = "Toggle a checklist item (e.g. squat)")]
        check: Option<String>,

        #[arg(long, help = "Toggle the day's completion")]
        done: bool,

        #[arg(long, help = "Print the weekly schedule")]
        schedule: bool,
    },

    /// Equipment checklist
    Gear {
        #[arg(long, value_name = "KEY", help = "Toggle an item by key")]
        toggle: Option<String>,

        #[arg(long, help = "Reset the list to the defaults")]
        reset: bool,

        #[arg(long, help = "Exit with an error unless every item is checked")]
        check: bool,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show or change the settings
    Settings {
        #[arg(long)]
        name: Option<String>,

        #[arg(long = "employee-id")]
        employee_id: Option<String>,

        #[arg(long = "start-date", value_name = "YYYY-MM-DD")]
        start_date: Option<String>,

        #[arg(long, help = "Savings goal amount")]
        goal: Option<f64>,

        #[arg(long, help = "Base pay per shift")]
        rate: Option<f64>,

        #[arg(long = "workout-time", value_name = "HH:MM")]
        workout_time: Option<String>,

        #[arg(long, value_name = "BOOL")]
        sound: Option<bool>,
    },

    /// Export the journey's shifts
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete every stored value
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
