//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure:
//! header, body, xref table, and trailer.
//!
//! Object numbering is fixed: 1 is the catalog, 2 the page tree, 3 the
//! Helvetica font, and every page then takes two consecutive numbers, its
//! content stream first and the page dictionary second.
//!
//! Offsets are never patched after the fact. Every object is serialized up
//! front, the offsets are summed from the serialized lengths, and only then is
//! the file concatenated.

use super::content_stream::{PageCanvas, FONT_RESOURCE};
use super::object_serializer::ObjectSerializer;
use crate::error::Result;
use crate::object::Object;
use std::io::Write;

/// Object number of the document catalog.
pub const CATALOG_ID: u32 = 1;
/// Object number of the page tree root.
pub const PAGES_ID: u32 = 2;
/// Object number of the shared font.
pub const FONT_ID: u32 = 3;
/// First object number handed out to page content.
pub const FIRST_PAGE_OBJECT_ID: u32 = 4;

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// US Letter (8.5" x 11")
    #[default]
    Letter,
    /// A4 (210mm x 297mm)
    A4,
    /// Custom width and height
    Custom(f64, f64),
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.0, 842.0),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }
}

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version written in the header (e.g., "1.4")
    pub version: String,
    /// Emit the binary-marker comment line after the header
    pub binary_marker: bool,
    /// Media box of every page
    pub page_size: PageSize,
    /// Base font registered as `/F1`
    pub base_font: String,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.4".to_string(),
            binary_marker: true,
            page_size: PageSize::Letter,
            base_font: "Helvetica".to_string(),
        }
    }
}

impl PdfWriterConfig {
    /// Set the header version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Enable or disable the binary-marker comment.
    pub fn with_binary_marker(mut self, enabled: bool) -> Self {
        self.binary_marker = enabled;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// PDF document writer.
///
/// Collects finished page content streams in order and turns them into a
/// single PDF file.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<String>,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
        }
    }

    /// Append a page whose content stream is `content`.
    pub fn add_page(&mut self, content: impl Into<String>) -> &mut Self {
        self.pages.push(content.into());
        self
    }

    /// Append a page rendered from `canvas`.
    pub fn add_canvas(&mut self, canvas: &PageCanvas) -> Result<&mut Self> {
        let content = canvas.build()?;
        Ok(self.add_page(content))
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of indirect objects the finished file will contain.
    pub fn object_count(&self) -> usize {
        (FIRST_PAGE_OBJECT_ID as usize - 1) + self.pages.len() * 2
    }

    /// Object numbers of the (content, page) pair for the page at `index`.
    pub fn page_object_ids(index: usize) -> (u32, u32) {
        let content_id = FIRST_PAGE_OBJECT_ID + (index as u32) * 2;
        (content_id, content_id + 1)
    }

    /// Build every indirect object in object-number order.
    fn objects(&self) -> Vec<(u32, Object)> {
        let (width, height) = self.config.page_size.dimensions();
        let mut objects = Vec::with_capacity(self.object_count());

        let kids: Vec<Object> = (0..self.pages.len())
            .map(|index| ObjectSerializer::reference(Self::page_object_ids(index).1, 0))
            .collect();

        objects.push((
            CATALOG_ID,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Catalog")),
                ("Pages", ObjectSerializer::reference(PAGES_ID, 0)),
            ]),
        ));
        objects.push((
            PAGES_ID,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Pages")),
                ("Count", ObjectSerializer::integer(self.pages.len() as i64)),
                ("Kids", ObjectSerializer::array(kids)),
            ]),
        ));
        objects.push((
            FONT_ID,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Font")),
                ("Subtype", ObjectSerializer::name("Type1")),
                ("BaseFont", ObjectSerializer::name(&self.config.base_font)),
            ]),
        ));

        for (index, content) in self.pages.iter().enumerate() {
            let (content_id, page_id) = Self::page_object_ids(index);
            objects.push((content_id, ObjectSerializer::stream(content.clone().into_bytes())));
            objects.push((
                page_id,
                ObjectSerializer::dict(vec![
                    ("Type", ObjectSerializer::name("Page")),
                    ("Parent", ObjectSerializer::reference(PAGES_ID, 0)),
                    ("MediaBox", ObjectSerializer::rect(0.0, 0.0, width, height)),
                    (
                        "Resources",
                        ObjectSerializer::dict(vec![(
                            "Font",
                            ObjectSerializer::dict(vec![(
                                FONT_RESOURCE,
                                ObjectSerializer::reference(FONT_ID, 0),
                            )]),
                        )]),
                    ),
                    ("Contents", ObjectSerializer::reference(content_id, 0)),
                ]),
            ));
        }

        objects
    }

    /// Build the complete PDF document.
    pub fn finish(self) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::new();

        let mut header = Vec::new();
        writeln!(header, "%PDF-{}", self.config.version)?;
        if self.config.binary_marker {
            header.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");
        }

        // Pass 1: serialize every object on its own.
        let serialized = self
            .objects()
            .into_iter()
            .map(|(id, obj)| serializer.serialize_indirect(id, 0, &obj))
            .collect::<std::io::Result<Vec<_>>>()?;

        // Pass 2: offsets are the running sum of everything before each object.
        let mut offsets = Vec::with_capacity(serialized.len());
        let mut position = header.len();
        for bytes in &serialized {
            offsets.push(position);
            position += bytes.len();
        }
        let xref_start = position;

        // Pass 3: concatenate.
        let mut output = Vec::with_capacity(xref_start + 64 + serialized.len() * 20);
        output.extend_from_slice(&header);
        for bytes in &serialized {
            output.extend_from_slice(bytes);
        }
        debug_assert_eq!(output.len(), xref_start);

        let size = serialized.len() + 1;
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", size)?;
        // Object 0 is always free
        writeln!(output, "0000000000 65535 f ")?;
        for offset in &offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(size as i64)),
            ("Root", ObjectSerializer::reference(CATALOG_ID, 0)),
        ]);
        writeln!(output, "trailer")?;
        serializer.write_object(&mut output, &trailer)?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        log::debug!(
            "Assembled PDF: {} pages, {} objects, xref at byte {}, {} bytes total",
            self.pages.len(),
            serialized.len(),
            xref_start,
            output.len()
        );

        Ok(output)
    }

    /// Save the PDF to a file.
    pub fn save(self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Assemble a PDF from finished page content streams using the default config.
pub fn assemble<S: AsRef<str>>(pages: &[S]) -> Result<Vec<u8>> {
    let mut writer = PdfWriter::new();
    for page in pages {
        writer.add_page(page.as_ref());
    }
    writer.finish()
}
