// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{ReportRow, get_headers, row_to_cells};
use crate::export::{ReportMeta, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const TITLE_ROW: u32 = 0;
const HEADER_ROW: u32 = 2;
const FIRST_DATA_ROW: u32 = 3;
const NOTES_COL: usize = 4;

/// Write the earnings report: title in A1, an empty row, headers on row 3,
/// one row per shift below.
pub(crate) fn export_xlsx(rows: &[ReportRow], meta: &ReportMeta, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("דוח משמרות").map_err(xlsx_err)?;
    worksheet.set_right_to_left(true);

    let title_format = Format::new().set_bold().set_font_size(14);
    worksheet
        .write_with_format(TITLE_ROW, 0, meta.sheet_title(), &title_format)
        .map_err(xlsx_err)?;

    let headers = get_headers();
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(HEADER_ROW, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }
    worksheet.set_freeze_panes(FIRST_DATA_ROW, 0).map_err(xlsx_err)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (i, r) in rows.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;
        let band = if i % 2 == 0 { band1 } else { band2 };

        for (col, value) in row_to_cells(r).iter().enumerate() {
            write_cell(worksheet, row, col, value, band)?;

            let widest_line = value.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
            col_widths[col] = col_widths[col].max(widest_line);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(xlsx_err)?;
    }

    workbook.save(path).map_err(xlsx_err)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Dates become Excel serials, numbers stay numeric, the rest is text.
fn write_cell(ws: &mut Worksheet, row: u32, col: usize, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let c = col as u16;

    if col == NOTES_COL {
        ws.write_with_format(row, c, s, &base.set_text_wrap())
            .map_err(xlsx_err)?;
        return Ok(());
    }

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        ws.write_with_format(row, c, serial, &base.set_num_format(num_format))
            .map_err(xlsx_err)?;
    } else if let Ok(num) = s.parse::<f64>() {
        ws.write_with_format(row, c, num, &base.set_align(FormatAlign::Right))
            .map_err(xlsx_err)?;
    } else {
        ws.write_with_format(row, c, s, &base).map_err(xlsx_err)?;
    }
    Ok(())
}

fn xlsx_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
