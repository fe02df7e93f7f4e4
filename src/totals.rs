//! Income, expense and tax totals.

use crate::model::Transaction;

/// Flat rate applied to positive net profit.
pub const ESTIMATED_TAX_RATE: f64 = 0.25;

/// Aggregates printed on the identity page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// Sum of income magnitudes
    pub income: f64,
    /// Sum of every other magnitude
    pub expenses: f64,
    /// `income - expenses`
    pub net_profit: f64,
    /// `max(0, net_profit) * ESTIMATED_TAX_RATE`
    pub estimated_tax: f64,
}

/// Total the given transactions.
///
/// Transactions explicitly typed as income add their magnitude to income;
/// everything else, including untyped transactions, counts as an expense.
pub fn calculate_totals(transactions: &[Transaction]) -> Totals {
    let (income, expenses) = transactions.iter().fold((0.0, 0.0), |(inc, exp), txn| {
        if txn.is_income() {
            (inc + txn.magnitude(), exp)
        } else {
            (inc, exp + txn.magnitude())
        }
    });

    let net_profit = income - expenses;
    Totals {
        income,
        expenses,
        net_profit,
        estimated_tax: net_profit.max(0.0) * ESTIMATED_TAX_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransactionType;

    fn txn(amount: f64, kind: Option<TransactionType>) -> Transaction {
        Transaction {
            amount,
            kind,
            ..Transaction::default()
        }
    }

    #[test]
    fn test_income_and_expenses() {
        let totals = calculate_totals(&[
            txn(1000.0, Some(TransactionType::Income)),
            txn(-200.0, Some(TransactionType::Expense)),
        ]);
        assert_eq!(totals.income, 1000.0);
        assert_eq!(totals.expenses, 200.0);
        assert_eq!(totals.net_profit, 800.0);
        assert_eq!(totals.estimated_tax, 200.0);
    }

    #[test]
    fn test_loss_has_no_tax() {
        let totals = calculate_totals(&[
            txn(100.0, Some(TransactionType::Income)),
            txn(300.0, Some(TransactionType::Expense)),
        ]);
        assert_eq!(totals.net_profit, -200.0);
        assert_eq!(totals.estimated_tax, 0.0);
    }

    #[test]
    fn test_untyped_counts_as_expense() {
        let totals = calculate_totals(&[txn(40.0, None)]);
        assert_eq!(totals.expenses, 40.0);
        assert_eq!(totals.income, 0.0);
    }

    #[test]
    fn test_non_finite_amounts_ignored() {
        let totals = calculate_totals(&[
            txn(f64::NAN, Some(TransactionType::Income)),
            txn(f64::INFINITY, None),
        ]);
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_empty() {
        assert_eq!(calculate_totals(&[]), Totals::default());
    }
}
