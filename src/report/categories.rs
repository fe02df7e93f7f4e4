//! Category breakdown section.

use crate::config::ReportConfig;
use crate::format::format_currency;
use crate::labels::Labels;
use crate::model::{Category, Currency, Transaction};
use crate::report::index_by_id;
use crate::report::table::{Column, Table};
use crate::writer::PageCanvas;
use indexmap::IndexMap;

/// Label used when a transaction has no tax-form mapping.
pub const UNMAPPED_LABEL: &str = "Unmapped";

const EMPTY_MESSAGE: &str = "No expense data available for this reporting period.";

const COLUMNS: [Column; 2] = [Column::new("Tax Label", 40.0), Column::new("Total Amount", 320.0)];

/// Summed expense amount for one tax label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    /// Trimmed tax label, or [`UNMAPPED_LABEL`]
    pub label: String,
    /// Sum of expense magnitudes
    pub amount: f64,
}

/// Sum expense magnitudes per tax label, largest first.
///
/// Income transactions are skipped. Labels with equal totals keep the order
/// in which they were first seen.
pub fn category_breakdown(transactions: &[Transaction], categories: &[Category]) -> Vec<CategoryRow> {
    let category_map = index_by_id(categories, |c| &c.id);
    let mut sums: IndexMap<String, f64> = IndexMap::new();

    for txn in transactions.iter().filter(|txn| !txn.is_income()) {
        let label = category_map
            .get(txn.category_id.as_str())
            .and_then(|category| category.tax_label.as_deref())
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(UNMAPPED_LABEL);
        *sums.entry(label.to_string()).or_insert(0.0) += txn.magnitude();
    }

    let mut rows: Vec<CategoryRow> = sums
        .into_iter()
        .map(|(label, amount)| CategoryRow { label, amount })
        .collect();
    rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    rows
}

/// Build the category breakdown pages. Always at least one page.
pub fn build_category_pages(
    transactions: &[Transaction],
    categories: &[Category],
    currency: Currency,
    labels: &Labels,
    config: &ReportConfig,
) -> Vec<PageCanvas> {
    let table = Table::new(labels.category_breakdown_title, &COLUMNS, config.category_rows_per_page);
    let rows = category_breakdown(transactions, categories);
    if rows.is_empty() {
        return vec![table.message_page(EMPTY_MESSAGE)];
    }

    let cells: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| vec![row.label, format_currency(row.amount, currency)])
        .collect();
    table.paginate(&cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{labels, ExportLang};
    use crate::model::TransactionType;
    use crate::writer::pdf_hex;

    fn expense(category_id: &str, amount: f64) -> Transaction {
        Transaction {
            category_id: category_id.to_string(),
            amount,
            kind: Some(TransactionType::Expense),
            ..Transaction::default()
        }
    }

    fn category(id: &str, tax_label: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            tax_label: tax_label.map(str::to_string),
            ..Category::default()
        }
    }

    #[test]
    fn test_breakdown_sums_and_sorts() {
        let categories = [category("c1", Some("Office expense")), category("c2", Some(" Travel "))];
        let rows = category_breakdown(
            &[expense("c1", -50.0), expense("c2", 80.0), expense("c1", 10.0)],
            &categories,
        );
        assert_eq!(
            rows,
            vec![
                CategoryRow { label: "Travel".into(), amount: 80.0 },
                CategoryRow { label: "Office expense".into(), amount: 60.0 },
            ]
        );
    }

    #[test]
    fn test_unmapped_and_income_excluded() {
        let categories = [category("c1", Some("   ")), category("c2", None)];
        let mut income = expense("c1", 500.0);
        income.kind = Some(TransactionType::Income);
        let rows = category_breakdown(
            &[expense("c1", 5.0), expense("c2", 6.0), expense("missing", 7.0), income],
            &categories,
        );
        assert_eq!(rows, vec![CategoryRow { label: UNMAPPED_LABEL.into(), amount: 18.0 }]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let categories = [category("a", Some("Zeta")), category("b", Some("Alpha"))];
        let rows = category_breakdown(&[expense("a", 10.0), expense("b", 10.0)], &categories);
        assert_eq!(rows[0].label, "Zeta");
        assert_eq!(rows[1].label, "Alpha");
    }

    #[test]
    fn test_empty_state_page() {
        let pages = build_category_pages(
            &[],
            &[],
            Currency::Usd,
            labels(ExportLang::En),
            &ReportConfig::default(),
        );
        assert_eq!(pages.len(), 1);
        let content = pages[0].build().unwrap();
        assert!(content.contains(&pdf_hex(EMPTY_MESSAGE)));
        assert!(!content.contains(&pdf_hex("Tax Label")));
    }

    #[test]
    fn test_rows_are_formatted() {
        let categories = [category("c1", Some("Office expense"))];
        let pages = build_category_pages(
            &[expense("c1", -1234.5)],
            &categories,
            Currency::Usd,
            labels(ExportLang::En),
            &ReportConfig::default(),
        );
        let content = pages[0].build().unwrap();
        assert!(content.contains(&pdf_hex("Office expense")));
        assert!(content.contains(&pdf_hex("$1,234.50")));
        assert!(content.contains("1 0 0 1 320.00 708.00 Tm"));
    }
}
