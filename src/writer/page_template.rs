//! Page footers with page-number placeholders.
//!
//! Footers are stamped in a second pass, once the total page count of the whole
//! document is known.
//!
//! # Example
//!
//! ```
//! use ledger_pdf::writer::{PageCanvas, PageFooter};
//!
//! let pages = vec![PageCanvas::new(), PageCanvas::new()];
//! let stamped = PageFooter::default().stamp_all(pages);
//! assert!(stamped.iter().all(PageCanvas::has_footer));
//! ```

use super::content_stream::PageCanvas;

/// Tokens substituted in footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placeholder {
    /// Current page number (1-indexed)
    PageNumber,
    /// Total number of pages
    TotalPages,
}

impl Placeholder {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Placeholder::PageNumber => "{page}",
            Placeholder::TotalPages => "{pages}",
        }
    }
}

/// Fixed-position footer text.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFooter {
    /// Footer text, may contain `{page}` and `{pages}`
    pub template: String,
    /// Horizontal position in points
    pub x: f64,
    /// Vertical position in points
    pub y: f64,
    /// Font size in points
    pub font_size: f32,
}

impl Default for PageFooter {
    fn default() -> Self {
        Self {
            template: "Page {page} of {pages}".to_string(),
            x: 260.0,
            y: 30.0,
            font_size: 9.0,
        }
    }
}

impl PageFooter {
    /// Resolve the placeholders for one page.
    pub fn render(&self, page_number: usize, total_pages: usize) -> String {
        self.template
            .replace(Placeholder::PageNumber.token(), &page_number.to_string())
            .replace(Placeholder::TotalPages.token(), &total_pages.to_string())
    }

    /// A canvas holding only this footer's text command.
    pub(crate) fn canvas(&self, page_number: usize, total_pages: usize) -> PageCanvas {
        PageCanvas::new().text(
            self.x,
            self.y,
            &self.render(page_number, total_pages),
            self.font_size,
        )
    }

    /// Stamp "page k of N" on every canvas, k counting from 1 in list order and
    /// N being the length of the list.
    pub fn stamp_all(&self, canvases: Vec<PageCanvas>) -> Vec<PageCanvas> {
        let total = canvases.len();
        canvases
            .into_iter()
            .enumerate()
            .map(|(index, canvas)| canvas.with_footer(self, index + 1, total))
            .collect()
    }
}
