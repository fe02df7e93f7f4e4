// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::manual_range_contains)]

//! # Ledger PDF
//!
//! Business export reports for a personal/business finance tracker, written
//! as standalone PDF files with no external formatting library.
//!
//! ## Core Features
//!
//! - **Report sections**: identity and totals, category breakdown by tax
//!   label, transaction ledger, receipts index, mileage summary
//! - **Pagination**: fixed rows per page per section, "Page k of N" footers
//!   stamped once the final page count is known
//! - **Localisation**: English, Spanish and French label sets
//! - **Byte-exact output**: every cross-reference offset lands on its object
//! - **Verification**: read back a produced file's xref table and check it
//!
//! ## Architecture
//!
//! ```text
//! ExportRequest ──► totals ──► report sections ──► Vec<PageCanvas>
//!                                                      │ footers
//!                                                      ▼
//!                                    writer::PdfWriter ──► bytes
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use ledger_pdf::{export_document, ExportRequest};
//!
//! let request = ExportRequest::from_json(r#"{
//!     "startDate": "2024-01-01",
//!     "endDate": "2024-12-31",
//!     "transactions": [
//!         {"date": "2024-01-05", "amount": -50, "type": "expense", "categoryId": "c1"},
//!         {"date": "2024-01-10", "amount": 200, "type": "income"}
//!     ],
//!     "categories": [{"id": "c1", "taxLabel": "Office expense"}]
//! }"#)?;
//!
//! let document = export_document(&request)?;
//! assert_eq!(document.filename, "luna-business-export-2024-01-01_to_2024-12-31.pdf");
//! assert!(document.bytes.starts_with(b"%PDF-"));
//! # Ok::<(), ledger_pdf::Error>(())
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// PDF objects and writing
pub mod object;
pub mod writer;
pub mod xref;

// Report inputs
pub mod config;
pub mod labels;
pub mod model;

// Report computation and layout
pub mod format;
pub mod report;
pub mod totals;

// Entry point
pub mod export;

pub use config::ReportConfig;
pub use error::{Error, Result};
pub use export::{export_document, pdf_filename, ExportDocument, TransactionFilter, PDF_CONTENT_TYPE};
pub use labels::{labels, ExportLang, Labels};
pub use model::{
    Account, Category, Currency, DistanceUnit, ExportOptions, ExportRequest, MileageRecord, Receipt,
    Region, Transaction, TransactionType,
};
pub use report::{build_pdf_export, build_report_pages};
pub use totals::{calculate_totals, Totals};

