//! Export entry point: filter, build, and name the document.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::model::{ExportRequest, Transaction};
use crate::report::build_pdf_export_with_config;

/// MIME type of the produced file.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Suggested download name for a reporting period.
pub fn pdf_filename(start_date: &str, end_date: &str) -> String {
    format!("luna-business-export-{}_to_{}.pdf", start_date, end_date)
}

/// Transaction selection for one export.
///
/// Dates are compared as strings, so both bounds and the transaction dates
/// are expected in ISO-8601 form. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// First date kept
    pub start_date: String,
    /// Last date kept
    pub end_date: String,
    /// Keep only this account, when set
    pub account_id: Option<String>,
    /// Keep only this category, when set
    pub category_id: Option<String>,
}

impl TransactionFilter {
    /// Filter on a date range only.
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            ..Self::default()
        }
    }

    /// Restrict to one account. An empty id clears the restriction.
    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        let account_id: String = account_id.into();
        self.account_id = (!account_id.is_empty()).then_some(account_id);
        self
    }

    /// Restrict to one category. An empty id clears the restriction.
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        let category_id: String = category_id.into();
        self.category_id = (!category_id.is_empty()).then_some(category_id);
        self
    }

    /// Whether `txn` passes. Undated transactions never do.
    pub fn matches(&self, txn: &Transaction) -> bool {
        if txn.date.is_empty() {
            return false;
        }
        if self.account_id.as_ref().is_some_and(|id| *id != txn.account_id) {
            return false;
        }
        if self.category_id.as_ref().is_some_and(|id| *id != txn.category_id) {
            return false;
        }
        txn.date.as_str() >= self.start_date.as_str() && txn.date.as_str() <= self.end_date.as_str()
    }

    /// Copy out the matching transactions, keeping their order.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions.iter().filter(|txn| self.matches(txn)).cloned().collect()
    }
}

/// A finished export ready to be saved or sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// File contents
    pub bytes: Vec<u8>,
    /// Suggested file name
    pub filename: String,
    /// MIME type
    pub content_type: &'static str,
}

impl ExportDocument {
    /// Write the bytes to `path`.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Build the PDF for `request` and attach its file name and content type.
pub fn export_document(request: &ExportRequest) -> Result<ExportDocument> {
    export_document_with_config(request, &ReportConfig::default())
}

/// Like [`export_document`] with a custom layout.
pub fn export_document_with_config(request: &ExportRequest, config: &ReportConfig) -> Result<ExportDocument> {
    let bytes = build_pdf_export_with_config(request, config)?;
    let filename = pdf_filename(&request.options.start_date, &request.options.end_date);
    log::debug!("Exported {} ({} bytes)", filename, bytes.len());
    Ok(ExportDocument {
        bytes,
        filename,
        content_type: PDF_CONTENT_TYPE,
    })
}
