//! Paged text tables.
//!
//! Every tabular section shares one layout: a title at the top of each page,
//! a header row at a fixed baseline, and body rows stepping down the page.
//! Rows are split into fixed-size chunks; each chunk becomes one canvas.

use crate::writer::PageCanvas;

/// Left margin of titles and first columns.
pub const LEFT_MARGIN: f64 = 40.0;
/// Baseline of section titles.
pub const TITLE_Y: f64 = 760.0;
/// Section title size.
pub const TITLE_SIZE: f32 = 16.0;
/// Baseline of header rows.
pub const HEADER_Y: f64 = 730.0;
/// Header text size.
pub const HEADER_SIZE: f32 = 11.0;
/// Baseline of the first body row.
pub const FIRST_ROW_Y: f64 = 708.0;
/// Distance between body rows.
pub const ROW_STEP: f64 = 16.0;
/// Body text size.
pub const ROW_SIZE: f32 = 10.0;
/// Baseline of empty-state messages.
pub const MESSAGE_Y: f64 = 720.0;

/// One table column: a header label and its x position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Header text
    pub header: &'static str,
    /// Left edge in points
    pub x: f64,
}

impl Column {
    /// Create a column.
    pub const fn new(header: &'static str, x: f64) -> Self {
        Self { header, x }
    }
}

/// Title plus columns for one paged section.
#[derive(Debug, Clone)]
pub struct Table<'a> {
    title: &'a str,
    columns: &'a [Column],
    rows_per_page: usize,
}

impl<'a> Table<'a> {
    /// Create a table layout.
    pub fn new(title: &'a str, columns: &'a [Column], rows_per_page: usize) -> Self {
        Self {
            title,
            columns,
            rows_per_page: rows_per_page.max(1),
        }
    }

    /// Canvas with the title only.
    pub fn title_canvas(&self) -> PageCanvas {
        PageCanvas::new().text(LEFT_MARGIN, TITLE_Y, self.title, TITLE_SIZE)
    }

    /// Title and a single message line, for sections with nothing to list.
    pub fn message_page(&self, message: &str) -> PageCanvas {
        self.title_canvas()
            .text(LEFT_MARGIN, MESSAGE_Y, message, HEADER_SIZE)
    }

    /// Lay `rows` out over as many pages as needed. Each row holds one cell
    /// per column; missing cells are skipped. No rows gives no pages.
    pub fn paginate(&self, rows: &[Vec<String>]) -> Vec<PageCanvas> {
        rows.chunks(self.rows_per_page)
            .map(|chunk| self.page(chunk))
            .collect()
    }

    fn page(&self, rows: &[Vec<String>]) -> PageCanvas {
        let header = self
            .columns
            .iter()
            .fold(self.title_canvas(), |canvas, column| {
                canvas.text(column.x, HEADER_Y, column.header, HEADER_SIZE)
            });

        rows.iter().enumerate().fold(header, |canvas, (i, row)| {
            let y = FIRST_ROW_Y - ROW_STEP * i as f64;
            self.columns
                .iter()
                .zip(row)
                .fold(canvas, |canvas, (column, cell)| {
                    canvas.text(column.x, y, cell, ROW_SIZE)
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [Column; 2] = [Column::new("A", 40.0), Column::new("B", 200.0)];

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n).map(|i| vec![format!("a{}", i), format!("b{}", i)]).collect()
    }

    #[test]
    fn test_paginate_chunks_rows() {
        let table = Table::new("Title", &COLUMNS, 3);
        let pages = table.paginate(&rows(7));
        assert_eq!(pages.len(), 3);
        // title + 2 headers + 3 rows * 2 cells
        assert_eq!(pages[0].text_count(), 9);
        assert_eq!(pages[2].text_count(), 5);
    }

    #[test]
    fn test_no_rows_no_pages() {
        let table = Table::new("Title", &COLUMNS, 3);
        assert!(table.paginate(&[]).is_empty());
    }

    #[test]
    fn test_row_positions() {
        let table = Table::new("T", &COLUMNS, 10);
        let content = table.paginate(&rows(2))[0].build().unwrap();
        assert!(content.contains("1 0 0 1 40.00 730.00 Tm"));
        assert!(content.contains("1 0 0 1 40.00 708.00 Tm"));
        assert!(content.contains("1 0 0 1 200.00 692.00 Tm"));
    }

    #[test]
    fn test_message_page() {
        let table = Table::new("T", &COLUMNS, 10);
        let page = table.message_page("Nothing here");
        assert_eq!(page.text_count(), 2);
        assert!(page.build().unwrap().contains("1 0 0 1 40.00 720.00 Tm"));
    }

    #[test]
    fn test_zero_rows_per_page_is_clamped() {
        let table = Table::new("T", &COLUMNS, 0);
        assert_eq!(table.paginate(&rows(2)).len(), 2);
    }
}
