// src/export/logic.rs

use crate::config::Config;
use crate::core::store::AppStore;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_rows;
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ReportMeta, default_file_name};
use crate::ui::messages::warning;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

/// High level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the journey's shifts (dated on or after the start date).
    ///
    /// - `file`: output path; defaults to `Vibe_Report_<first name>...` in the
    ///   current directory
    /// - `range`: `None`, `"all"`, or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   `start:end` intervals of the same shape
    ///
    /// Returns the path written, or `None` when there was nothing to export.
    pub fn export(
        store: &AppStore,
        cfg: &Config,
        format: ExportFormat,
        file: Option<&str>,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let settings = store.load_settings()?;
        let ledger = store.load_ledger()?;
        let events = store.load_events()?;

        let mut shifts = ledger.filter_since(settings.start_date);
        if let Some((from, to)) = bounds {
            shifts.retain(|s| s.date >= from && s.date <= to);
        }

        if shifts.is_empty() {
            warning("No shifts found to export.");
            return Ok(None);
        }

        let rows = build_rows(&shifts, &events, settings.shift_rate, &cfg.pay_rules());

        let meta = ReportMeta {
            user_name: settings.user_name.clone(),
            employee_id: settings.employee_id.clone(),
            generated_on: today(),
        };

        let path = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(default_file_name(
                &meta,
                format,
                Utc::now().timestamp_millis(),
            )),
        };

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &meta, &path)?,
            ExportFormat::Pdf => export_pdf(&rows, &meta, &path)?,
        }

        store.audit(
            "export",
            &path.display().to_string(),
            &format!("{} rows as {}", rows.len(), format.as_str()),
        );

        Ok(Some(path))
    }
}
