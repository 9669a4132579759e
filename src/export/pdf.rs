// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_H: f32 = 20.0;

const FONT_SIZE: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 18.0;
const INFO_FONT_SIZE: f32 = 11.0;
const INFO_LINE_H: f32 = 16.0;

/// Minimal A4 table writer on top of `pdf-writer`, using the built-in
/// Helvetica font (WinAnsi only: callers pass ASCII text).
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a page, returning the content stream id to fill later.
    fn new_page(&mut self) -> Ref {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        content_id
    }

    /// Report with a title block on the first page and a table that flows
    /// over as many pages as needed. The header row repeats on every page.
    pub fn write_report(
        &mut self,
        title: &str,
        info_lines: &[String],
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let col_widths = compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_no = 1;

        loop {
            let content_id = self.new_page();
            let mut content = Content::new();
            let mut y = PAGE_H - MARGIN;

            if page_no == 1 {
                draw_text(&mut content, MARGIN, y, TITLE_FONT_SIZE, title);
                y -= TITLE_FONT_SIZE + 10.0;
                for line in info_lines {
                    draw_text(&mut content, MARGIN, y, INFO_FONT_SIZE, line);
                    y -= INFO_LINE_H;
                }
                y -= 14.0;
            } else {
                draw_text(&mut content, MARGIN, y, HEADER_FONT_SIZE, title);
                y -= 24.0;
            }

            y -= ROW_H;
            fill_band(&mut content, y, &col_widths, (0.85, 0.87, 0.90));
            draw_row(&mut content, y, &col_widths, &header_row, HEADER_FONT_SIZE);

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - ROW_H < MARGIN {
                    break;
                }
                y -= ROW_H;
                if i % 2 == 0 {
                    fill_band(&mut content, y, &col_widths, (0.96, 0.96, 0.96));
                }
                draw_row(&mut content, y, &col_widths, row, FONT_SIZE);
                consumed += 1;
            }

            let footer = format!("Page {page_no}");
            draw_text(&mut content, PAGE_W - MARGIN - 40.0, MARGIN - 30.0, FONT_SIZE, &footer);

            self.pdf.stream(content_id, &content.finish());

            remaining = &remaining[consumed..];
            page_no += 1;
            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .count(self.page_refs.len() as i32)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Replace anything Helvetica cannot show with `?`.
pub(crate) fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    let safe = pdf_safe(text);
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(safe.as_bytes()));
    content.end_text();
}

fn fill_band(content: &mut Content, y: f32, col_widths: &[f32], rgb: (f32, f32, f32)) {
    content.save_state();
    content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
    content.rect(MARGIN, y, col_widths.iter().sum(), ROW_H);
    content.fill_nonzero();
    content.restore_state();
}

fn draw_row(content: &mut Content, y: f32, col_widths: &[f32], row: &[String], size: f32) {
    let mut x = MARGIN;
    for (text, w) in row.iter().zip(col_widths) {
        draw_text(content, x + 4.0, y + 6.0, size, text);

        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, *w, ROW_H);
        content.stroke();
        content.restore_state();

        x += w;
    }
}

/// Width per column from the longest cell, scaled down to fit the page.
fn compute_col_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
    let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5 + 8.0).collect();

    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = w.max(cell.chars().count() as f32 * 6.2 + 8.0);
        }
    }

    let total: f32 = widths.iter().sum();
    let max = PAGE_W - 2.0 * MARGIN;
    if total > max {
        let scale = max / total;
        widths.iter_mut().for_each(|w| *w *= scale);
    }

    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_is_masked() {
        assert_eq!(pdf_safe("Amit שני"), "Amit ???");
        assert_eq!(pdf_safe("NIS 1,200"), "NIS 1,200");
    }

    #[test]
    fn wide_tables_fit_the_page() {
        let rows = vec![vec!["x".repeat(200), "y".repeat(200)]];
        let widths = compute_col_widths(&["A", "B"], &rows);
        let total: f32 = widths.iter().sum();
        assert!(total <= PAGE_W - 2.0 * MARGIN + 0.01);
    }
}
