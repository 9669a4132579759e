use crate::core::calendar::DateWindow;
use crate::core::ledger::PayRules;
use crate::ui::messages::warning;
use crate::utils::path::resolve_against;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_goal_start_date")]
    pub goal_start_date: NaiveDate,
    #[serde(default = "default_overtime_threshold")]
    pub overtime_threshold_hours: f64,
    #[serde(default = "default_overtime_rate")]
    pub overtime_rate: f64,
    #[serde(default = "default_sleepover_bonus")]
    pub sleepover_bonus: f64,
    #[serde(default = "default_net_ratio")]
    pub net_ratio: f64,
    #[serde(default = "default_vacation")]
    pub vacation: DateWindow,
    #[serde(default = "default_course_week")]
    pub course_week: DateWindow,
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(crate) fn default_goal_start_date() -> NaiveDate {
    ymd(2026, 2, 15)
}
pub(crate) fn default_overtime_threshold() -> f64 {
    10.0
}
pub(crate) fn default_overtime_rate() -> f64 {
    56.0
}
pub(crate) fn default_sleepover_bonus() -> f64 {
    80.0
}
pub(crate) fn default_net_ratio() -> f64 {
    0.85
}
pub(crate) fn default_vacation() -> DateWindow {
    DateWindow::new(ymd(2026, 5, 7), ymd(2026, 5, 14))
}
pub(crate) fn default_course_week() -> DateWindow {
    DateWindow::new(ymd(2026, 2, 8), ymd(2026, 2, 14))
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    pub fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            goal_start_date: default_goal_start_date(),
            overtime_threshold_hours: default_overtime_threshold(),
            overtime_rate: default_overtime_rate(),
            sleepover_bonus: default_sleepover_bonus(),
            net_ratio: default_net_ratio(),
            vacation: default_vacation(),
            course_week: default_course_week(),
        }
    }

    /// Pay constants used by the ledger.
    pub fn pay_rules(&self) -> PayRules {
        PayRules {
            overtime_threshold: self.overtime_threshold_hours,
            overtime_rate: self.overtime_rate,
            sleepover_bonus: self.sleepover_bonus,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("vibelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".vibelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("vibelog.conf")
    }

    /// Return the full path of the SQLite store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("vibelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file is reported and replaced by defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Invalid configuration file {}: {e}. Using defaults.",
                        path.display()
                    ));
                    Config::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Cannot read configuration file {}: {e}. Using defaults.",
                    path.display()
                ));
                Config::default()
            }
        }
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        // Store name: user provided or default
        let db_path = match custom_name {
            Some(name) => resolve_against(&dir, &name),
            None => dir.join("vibelog.sqlite"),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
