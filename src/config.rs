//! Configuration for report layout.

/// Report layout configuration.
///
/// Controls how many rows each tabular section fits on one page and how many
/// characters each free-text column keeps before it is cut with `…`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Rows per category breakdown page.
    pub category_rows_per_page: usize,

    /// Rows per transaction ledger page.
    pub ledger_rows_per_page: usize,

    /// Rows per receipts index page.
    pub receipt_rows_per_page: usize,

    /// Ledger description width.
    pub ledger_description_chars: usize,

    /// Ledger account and category width.
    pub ledger_name_chars: usize,

    /// Receipts index description width.
    pub receipt_description_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            category_rows_per_page: 28,
            ledger_rows_per_page: 24,
            receipt_rows_per_page: 22,
            ledger_description_chars: 28,
            ledger_name_chars: 18,
            receipt_description_chars: 30,
        }
    }

    /// Set rows per category page (at least one).
    pub fn with_category_rows(mut self, rows: usize) -> Self {
        self.category_rows_per_page = rows.max(1);
        self
    }

    /// Set rows per ledger page (at least one).
    pub fn with_ledger_rows(mut self, rows: usize) -> Self {
        self.ledger_rows_per_page = rows.max(1);
        self
    }

    /// Set rows per receipts page (at least one).
    pub fn with_receipt_rows(mut self, rows: usize) -> Self {
        self.receipt_rows_per_page = rows.max(1);
        self
    }

    /// Set the ledger description width.
    pub fn with_ledger_description_chars(mut self, chars: usize) -> Self {
        self.ledger_description_chars = chars.max(1);
        self
    }

    /// Set the ledger account/category width.
    pub fn with_ledger_name_chars(mut self, chars: usize) -> Self {
        self.ledger_name_chars = chars.max(1);
        self
    }

    /// Set the receipts description width.
    pub fn with_receipt_description_chars(mut self, chars: usize) -> Self {
        self.receipt_description_chars = chars.max(1);
        self
    }
}
