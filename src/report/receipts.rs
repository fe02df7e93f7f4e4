//! Receipts index section.

use crate::config::ReportConfig;
use crate::format::{truncate_text, PLACEHOLDER};
use crate::labels::Labels;
use crate::model::{Receipt, Transaction};
use crate::report::index_by_id;
use crate::report::table::{Column, Table};
use crate::writer::PageCanvas;

const MISSING_DESCRIPTION: &str = "-";

const COLUMNS: [Column; 4] = [
    Column::new("Receipt ID", 40.0),
    Column::new("Tx Date", 160.0),
    Column::new("Tx Description", 260.0),
    Column::new("File Name", 460.0),
];

/// Build the receipts index: one row per receipt whose transaction exists.
///
/// Receipts without a resolvable transaction are dropped. Returns no pages
/// when nothing is left.
pub fn build_receipt_pages(
    receipts: &[Receipt],
    transactions: &[Transaction],
    labels: &Labels,
    config: &ReportConfig,
) -> Vec<PageCanvas> {
    let transaction_map = index_by_id(transactions, |t| &t.id);

    let rows: Vec<Vec<String>> = receipts
        .iter()
        .filter_map(|receipt| {
            let txn = receipt
                .transaction_ref()
                .and_then(|id| transaction_map.get(id).copied());
            if txn.is_none() {
                log::debug!(
                    "Dropping receipt {:?}: transaction {:?} not found",
                    receipt.receipt_ref(),
                    receipt.transaction_ref()
                );
            }
            let txn = txn?;
            let description = if txn.description.is_empty() {
                MISSING_DESCRIPTION
            } else {
                txn.description.as_str()
            };
            Some(vec![
                receipt.receipt_ref().unwrap_or_default().to_string(),
                txn.date.clone(),
                truncate_text(description, config.receipt_description_chars),
                receipt.file_name().unwrap_or(PLACEHOLDER).to_string(),
            ])
        })
        .collect();

    Table::new(labels.receipts_index_title, &COLUMNS, config.receipt_rows_per_page).paginate(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{labels, ExportLang};
    use crate::writer::pdf_hex;

    fn txn(id: &str, description: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: "2024-02-02".to_string(),
            description: description.to_string(),
            ..Transaction::default()
        }
    }

    fn receipt(id: &str, transaction_id: &str, filename: Option<&str>) -> Receipt {
        Receipt {
            id: Some(id.to_string()),
            transaction_id: Some(transaction_id.to_string()),
            filename: filename.map(str::to_string),
            ..Receipt::default()
        }
    }

    fn build(receipts: &[Receipt], transactions: &[Transaction]) -> Vec<PageCanvas> {
        build_receipt_pages(receipts, transactions, labels(ExportLang::En), &ReportConfig::default())
    }

    #[test]
    fn test_unresolved_receipt_dropped() {
        assert!(build(&[receipt("r1", "nope", None)], &[txn("t1", "Lunch")]).is_empty());
    }

    #[test]
    fn test_no_receipts_no_pages() {
        assert!(build(&[], &[txn("t1", "Lunch")]).is_empty());
    }

    #[test]
    fn test_joined_row() {
        let pages = build(
            &[receipt("r1", "t1", None), receipt("r2", "t9", Some("x.pdf"))],
            &[txn("t1", "Client lunch")],
        );
        assert_eq!(pages.len(), 1);
        // title + 4 headers + 1 row of 4 cells
        assert_eq!(pages[0].text_count(), 9);
        let content = pages[0].build().unwrap();
        assert!(content.contains(&pdf_hex("r1")));
        assert!(content.contains(&pdf_hex("2024-02-02")));
        assert!(content.contains(&pdf_hex("Client lunch")));
        assert!(content.contains(&pdf_hex("—")));
        assert!(!content.contains(&pdf_hex("x.pdf")));
    }

    #[test]
    fn test_legacy_transaction_key() {
        let legacy = Receipt {
            legacy_id: Some("r7".into()),
            txn_id: Some("t1".into()),
            name: Some("scan.jpg".into()),
            ..Receipt::default()
        };
        let pages = build(&[legacy], &[txn("t1", "")]);
        let content = pages[0].build().unwrap();
        assert!(content.contains(&pdf_hex("r7")));
        assert!(content.contains(&pdf_hex("scan.jpg")));
        assert!(content.contains(&format!("1 0 0 1 260.00 708.00 Tm\n{} Tj", pdf_hex("-"))));
    }

    #[test]
    fn test_pagination() {
        let transactions = [txn("t1", "Supplies")];
        let receipts: Vec<Receipt> = (0..23).map(|i| receipt(&format!("r{}", i), "t1", None)).collect();
        let pages = build(&receipts, &transactions);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].text_count(), 1 + 4 + 4);
    }
}
