//! Transaction ledger section.

use crate::config::ReportConfig;
use crate::format::{format_currency, truncate_text};
use crate::labels::Labels;
use crate::model::{Account, Category, Currency, Transaction, TransactionType};
use crate::report::index_by_id;
use crate::report::table::{Column, Table};
use crate::writer::PageCanvas;

const EMPTY_MESSAGE: &str = "No transactions recorded for this period.";
const MISSING: &str = "-";

const COLUMNS: [Column; 7] = [
    Column::new("Date", 40.0),
    Column::new("Description", 110.0),
    Column::new("Type", 280.0),
    Column::new("Account", 340.0),
    Column::new("Category", 420.0),
    Column::new("Amount", 500.0),
    Column::new("Receipt", 560.0),
];

/// Build the ledger pages: every transaction in date order. Always at least
/// one page.
pub fn build_ledger_pages(
    transactions: &[Transaction],
    accounts: &[Account],
    categories: &[Category],
    currency: Currency,
    labels: &Labels,
    config: &ReportConfig,
) -> Vec<PageCanvas> {
    let table = Table::new(labels.transaction_log_title, &COLUMNS, config.ledger_rows_per_page);
    if transactions.is_empty() {
        return vec![table.message_page(EMPTY_MESSAGE)];
    }

    let account_map = index_by_id(accounts, |a| &a.id);
    let category_map = index_by_id(categories, |c| &c.id);

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let rows: Vec<Vec<String>> = sorted
        .into_iter()
        .map(|txn| {
            let category = category_map.get(txn.category_id.as_str());
            let account_name = account_map
                .get(txn.account_id.as_str())
                .map(|account| account.name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(MISSING);
            let category_name = category
                .map(|category| category.name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(MISSING);
            let description = if txn.description.is_empty() {
                MISSING
            } else {
                txn.description.as_str()
            };
            let kind = txn
                .kind
                .or_else(|| category.and_then(|category| category.kind))
                .unwrap_or(TransactionType::Expense);

            vec![
                txn.date.clone(),
                truncate_text(description, config.ledger_description_chars),
                type_label(kind).to_string(),
                truncate_text(account_name, config.ledger_name_chars),
                truncate_text(category_name, config.ledger_name_chars),
                format_currency(txn.magnitude(), currency),
                if txn.has_receipt() { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();

    table.paginate(&rows)
}

fn type_label(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "Income",
        TransactionType::Expense => "Expense",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{labels, ExportLang};
    use crate::writer::pdf_hex;

    fn txn(date: &str, description: &str) -> Transaction {
        Transaction {
            date: date.to_string(),
            description: description.to_string(),
            amount: -12.0,
            ..Transaction::default()
        }
    }

    fn build(transactions: &[Transaction], accounts: &[Account], categories: &[Category]) -> Vec<String> {
        build_ledger_pages(
            transactions,
            accounts,
            categories,
            Currency::Usd,
            labels(ExportLang::En),
            &ReportConfig::default(),
        )
        .iter()
        .map(|page| page.build().unwrap())
        .collect()
    }

    #[test]
    fn test_empty_state_page() {
        let pages = build(&[], &[], &[]);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains(&pdf_hex(EMPTY_MESSAGE)));
    }

    #[test]
    fn test_sorted_by_date() {
        let pages = build(&[txn("2024-03-01", "late"), txn("2024-01-01", "early")], &[], &[]);
        let early = pages[0].find(&pdf_hex("early")).unwrap();
        let late = pages[0].find(&pdf_hex("late")).unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_missing_names_and_truncation() {
        let long = "A very long description that will not fit";
        let pages = build(&[txn("2024-01-01", long)], &[], &[]);
        assert!(pages[0].contains(&pdf_hex(&truncate_text(long, 28))));
        assert!(pages[0].contains(&format!("1 0 0 1 340.00 708.00 Tm\n{} Tj", pdf_hex("-"))));
        assert!(pages[0].contains(&pdf_hex("$12.00")));
        assert!(pages[0].contains(&pdf_hex("No")));
    }

    #[test]
    fn test_type_falls_back_to_category() {
        let categories = [Category {
            id: "c1".into(),
            name: "Consulting revenue".into(),
            kind: Some(TransactionType::Income),
            tax_label: None,
        }];
        let mut t = txn("2024-01-01", "Invoice");
        t.category_id = "c1".into();
        t.receipt_id = Some("r1".into());
        let pages = build(&[t], &[], &categories);
        assert!(pages[0].contains(&pdf_hex("Income")));
        assert!(pages[0].contains(&pdf_hex("Consulting revenue")));
        assert!(pages[0].contains(&pdf_hex("Yes")));
    }

    #[test]
    fn test_account_name_resolved() {
        let accounts = [Account {
            id: "a1".into(),
            name: "Business checking account".into(),
            kind: "checking".into(),
        }];
        let mut t = txn("2024-01-01", "Paper");
        t.account_id = "a1".into();
        let pages = build(&[t], &accounts, &[]);
        assert!(pages[0].contains(&pdf_hex("Business checking…")));
    }

    #[test]
    fn test_pagination() {
        let transactions: Vec<Transaction> = (0..49).map(|i| txn(&format!("2024-01-{:02}", i % 28 + 1), "x")).collect();
        assert_eq!(build(&transactions, &[], &[]).len(), 3);
    }
}
