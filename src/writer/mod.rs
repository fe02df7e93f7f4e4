//! PDF writing module for generating PDF files.
//!
//! ## Architecture
//!
//! ```text
//! text ──[pdf_hex]──► PageCanvas (draw commands, one per page)
//!                        ↓  PageFooter::stamp_all (second pass, needs N)
//!                     content stream strings
//!                        ↓
//!                     [PdfWriter] (catalog, page tree, font, pages)
//!                        ↓
//!                     [ObjectSerializer] (indirect objects)
//!                        ↓
//!                     PDF bytes + xref
//! ```
//!
//! ```
//! use ledger_pdf::writer::{PageCanvas, PdfWriter};
//!
//! let mut writer = PdfWriter::new();
//! writer.add_canvas(&PageCanvas::new().text(72.0, 720.0, "Hello", 12.0).add_footer(1, 1))?;
//! let bytes = writer.finish()?;
//! assert!(bytes.starts_with(b"%PDF-"));
//! # Ok::<(), ledger_pdf::Error>(())
//! ```

mod content_stream;
mod object_serializer;
mod page_template;
mod pdf_writer;
mod text_encoding;

pub use content_stream::{format_coordinate, ContentStreamOp, PageCanvas, FONT_RESOURCE};
pub use object_serializer::ObjectSerializer;
pub use page_template::PageFooter;
pub use pdf_writer::{
    assemble, PageSize, PdfWriter, PdfWriterConfig, CATALOG_ID, FIRST_PAGE_OBJECT_ID, FONT_ID,
    PAGES_ID,
};
pub use text_encoding::{pdf_hex, BYTE_ORDER_MARK};
