// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportRow, STATUS_COURSE};
use crate::export::pdf::PdfManager;
use crate::export::{ReportMeta, notify_export_success};
use crate::ui::messages::{info, warning};
use crate::utils::date::display_date;
use crate::utils::formatting::hours;
use std::path::Path;

const PDF_TITLE: &str = "Activity Report - VIBE";
const PDF_HEADERS: [&str; 4] = ["Date", "Hours", "Status", "Income"];

pub(crate) fn export_pdf(rows: &[ReportRow], meta: &ReportMeta, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let employee_id = if meta.employee_id.trim().is_empty() {
        "---"
    } else {
        meta.employee_id.as_str()
    };
    let name = pdf_name(meta);
    if name != meta.user_name.trim() {
        warning(format!(
            "The PDF font cannot show '{}'; the report uses '{name}' instead.",
            meta.user_name
        ));
    }

    let info_lines = vec![
        format!("Name: {name}"),
        format!("Employee ID: {employee_id}"),
        format!("Generated: {}", display_date(meta.generated_on)),
    ];

    let table: Vec<Vec<String>> = rows.iter().map(pdf_cells).collect();

    let mut pdf = PdfManager::new();
    pdf.write_report(PDF_TITLE, &info_lines, &PDF_HEADERS, &table);
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

/// Name for the title block. Names the base font cannot render at all
/// (no ASCII letters or digits) fall back to the employee id.
fn pdf_name(meta: &ReportMeta) -> String {
    let name = meta.user_name.trim();
    if name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return name.to_string();
    }

    match meta.employee_id.trim() {
        "" => "Employee".to_string(),
        id if id.is_ascii() => format!("Employee {id}"),
        _ => "Employee".to_string(),
    }
}

fn pdf_cells(r: &ReportRow) -> Vec<String> {
    let status = if r.status == STATUS_COURSE { "Course" } else { "Shift" };
    vec![
        r.date.clone(),
        hours(r.hours),
        status.to_string(),
        format!("NIS {}", hours(r.gross_pay)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn meta(name: &str, id: &str) -> ReportMeta {
        ReportMeta {
            user_name: name.into(),
            employee_id: id.into(),
            generated_on: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        }
    }

    #[test]
    fn hebrew_only_name_falls_back_to_employee_id() {
        assert_eq!(pdf_name(&meta("עמית שני", "4711")), "Employee 4711");
        assert_eq!(pdf_name(&meta("עמית שני", "")), "Employee");
    }

    #[test]
    fn latin_name_is_kept() {
        assert_eq!(pdf_name(&meta(" Dana Levi ", "4711")), "Dana Levi");
    }
}
