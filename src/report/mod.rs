//! Report layout.
//!
//! Each section builder turns records into zero or more page canvases and
//! handles its own pagination. [`build_report_pages`] runs them in report
//! order and stamps the "Page k of N" footers once the total is known;
//! [`build_pdf_export`] then hands the stamped pages to the writer.
//!
//! | Section | Pages |
//! |---------|-------|
//! | identity | always one |
//! | category breakdown | at least one (empty-state page) |
//! | transaction ledger | at least one (empty-state page) |
//! | receipts index | zero when no receipt joins a transaction |
//! | mileage summary | zero or one |

mod categories;
mod identity;
mod ledger;
mod mileage;
mod receipts;
pub mod table;

pub use categories::{build_category_pages, category_breakdown, CategoryRow, UNMAPPED_LABEL};
pub use identity::build_identity_page;
pub use ledger::build_ledger_pages;
pub use mileage::{build_mileage_pages, MileageSummary};
pub use receipts::build_receipt_pages;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::labels::labels;
use crate::model::ExportRequest;
use crate::totals::calculate_totals;
use crate::writer::{PageCanvas, PageFooter, PdfWriter};
use std::collections::HashMap;

/// Map items by id. Items with an empty id are skipped; a later duplicate
/// replaces an earlier one.
pub(crate) fn index_by_id<'a, T>(items: &'a [T], id: impl Fn(&T) -> &String) -> HashMap<&'a str, &'a T> {
    items
        .iter()
        .filter_map(|item| {
            let key = id(item);
            (!key.is_empty()).then(|| (key.as_str(), item))
        })
        .collect()
}

/// Build every section and stamp page footers, in report order.
pub fn build_report_pages(request: &ExportRequest, config: &ReportConfig) -> Vec<PageCanvas> {
    let options = &request.options;
    let labels = labels(options.lang());
    let currency = options.currency();
    let totals = calculate_totals(&request.transactions);

    let sections: [(&str, Vec<PageCanvas>); 5] = [
        ("identity", vec![build_identity_page(options, &totals, currency, labels)]),
        (
            "categories",
            build_category_pages(&request.transactions, &request.categories, currency, labels, config),
        ),
        (
            "ledger",
            build_ledger_pages(
                &request.transactions,
                &request.accounts,
                &request.categories,
                currency,
                labels,
                config,
            ),
        ),
        (
            "receipts",
            build_receipt_pages(&request.receipts, &request.transactions, labels, config),
        ),
        ("mileage", build_mileage_pages(&request.mileage, labels)),
    ];

    let mut pages = Vec::new();
    for (name, section) in sections {
        log::debug!("Section {}: {} page(s)", name, section.len());
        pages.extend(section);
    }

    PageFooter::default().stamp_all(pages)
}

/// Build the complete PDF file for `request` with the default layout.
pub fn build_pdf_export(request: &ExportRequest) -> Result<Vec<u8>> {
    build_pdf_export_with_config(request, &ReportConfig::default())
}

/// Build the complete PDF file for `request`.
pub fn build_pdf_export_with_config(request: &ExportRequest, config: &ReportConfig) -> Result<Vec<u8>> {
    let mut writer = PdfWriter::new();
    for page in build_report_pages(request, config) {
        writer.add_canvas(&page)?;
    }
    writer.finish()
}
