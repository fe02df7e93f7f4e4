//! Page content streams.
//!
//! A [`PageCanvas`] is the ordered list of text operators for one page. It is a
//! plain value: every drawing call consumes the canvas and hands back the
//! extended one, so a canvas stored in a list can never be changed behind the
//! list's back.

use super::page_template::PageFooter;
use super::text_encoding::pdf_hex;
use crate::error::Result;
use std::io::Write;

/// Resource name under which the built-in font is registered on every page.
pub const FONT_RESOURCE: &str = "F1";

/// Operations that can appear in a page content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(String, f32),
    /// Place the text origin with an identity text matrix (Tm)
    SetTextPosition(f64, f64),
    /// Show hex-encoded text (Tj)
    ShowHexText(String),
}

/// Accumulated draw commands for a single page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageCanvas {
    operations: Vec<ContentStreamOp>,
    footer: Vec<ContentStreamOp>,
}

impl PageCanvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `text` at (`x`, `y`) in the built-in font at `size` points.
    #[must_use]
    pub fn text(mut self, x: f64, y: f64, text: &str, size: f32) -> Self {
        self.operations.extend([
            ContentStreamOp::SetFont(FONT_RESOURCE.to_string(), size),
            ContentStreamOp::SetTextPosition(x, y),
            ContentStreamOp::ShowHexText(pdf_hex(text)),
        ]);
        self
    }

    /// Stamp the default "Page k of N" footer.
    #[must_use]
    pub fn add_footer(self, page_number: usize, total_pages: usize) -> Self {
        self.with_footer(&PageFooter::default(), page_number, total_pages)
    }

    /// Stamp `footer` for page `page_number` of `total_pages`.
    ///
    /// The footer is always rendered after every other command, and a canvas
    /// carries at most one: stamping again replaces the earlier footer.
    #[must_use]
    pub fn with_footer(mut self, footer: &PageFooter, page_number: usize, total_pages: usize) -> Self {
        self.footer = footer.canvas(page_number, total_pages).operations;
        self
    }

    /// Whether the footer has been stamped.
    pub fn has_footer(&self) -> bool {
        !self.footer.is_empty()
    }

    /// Body operations, excluding the text-object markers and the footer.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Number of text placements on the page, footer excluded.
    pub fn text_count(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| matches!(op, ContentStreamOp::ShowHexText(_)))
            .count()
    }

    /// Render the content stream: `BT`, every command, `ET`, joined by newlines.
    pub fn build(&self) -> Result<String> {
        let mut buf = Vec::new();
        write_op(&mut buf, &ContentStreamOp::BeginText)?;
        for op in self.operations.iter().chain(&self.footer) {
            writeln!(buf)?;
            write_op(&mut buf, op)?;
        }
        writeln!(buf)?;
        write_op(&mut buf, &ContentStreamOp::EndText)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Format a coordinate with two decimals; non-finite values become `0.00`.
pub fn format_coordinate(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "0.00".to_string()
    }
}

fn write_op<W: Write>(w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
    match op {
        ContentStreamOp::BeginText => write!(w, "BT"),
        ContentStreamOp::EndText => write!(w, "ET"),
        ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, size),
        ContentStreamOp::SetTextPosition(x, y) => write!(
            w,
            "1 0 0 1 {} {} Tm",
            format_coordinate(*x),
            format_coordinate(*y)
        ),
        ContentStreamOp::ShowHexText(hex) => write!(w, "{} Tj", hex),
    }
}
