// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod range;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{ReportRow, build_rows};
pub use range::parse_range;

use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// Common helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Identity block printed at the top of a report.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub user_name: String,
    pub employee_id: String,
    pub generated_on: NaiveDate,
}

impl ReportMeta {
    /// Spreadsheet title line.
    pub fn sheet_title(&self) -> String {
        format!(
            "דוח הכנסות - {} | מספר עובד: {}",
            self.user_name, self.employee_id
        )
    }

    pub fn first_name(&self) -> &str {
        self.user_name.split(' ').next().unwrap_or("")
    }
}

/// `Vibe_Report_<first name>.<ext>`; PDF names also carry `_<epoch ms>`.
pub fn default_file_name(meta: &ReportMeta, format: ExportFormat, now_millis: i64) -> String {
    match format {
        ExportFormat::Pdf => format!("Vibe_Report_{}_{}.pdf", meta.first_name(), now_millis),
        other => format!("Vibe_Report_{}.{}", meta.first_name(), other.as_str()),
    }
}
