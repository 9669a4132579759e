//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Malformed value for key '{key}': {message}")]
    MalformedValue { key: String, message: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Shift #{0} not found")]
    ShiftNotFound(i64),

    #[error("Shift date is required")]
    MissingDate,

    #[error("Vacation! No work between {start} and {end}.")]
    VacationDay { start: String, end: String },

    #[error("Event text must not be empty")]
    EmptyEvent,

    #[error("Unknown checklist item: {0}")]
    UnknownItem(String),

    #[error("Shift timer error: {0}")]
    Timer(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
