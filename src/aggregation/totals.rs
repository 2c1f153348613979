//! Full-span totals per transaction type

use super::series::TypeAmounts;
use crate::records::{TransactionRecord, TransactionType};
use serde::Serialize;

/// Totals shown above the transaction list
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TypeTotals {
    #[serde(flatten)]
    pub amounts: TypeAmounts,

    /// Income minus expenses; savings and sadaqah are not deducted
    pub balance: f64,
}

impl TypeTotals {
    pub fn get(&self, kind: TransactionType) -> f64 {
        self.amounts.get(kind)
    }
}

/// Sum every record by type and derive the balance
pub fn type_totals(records: &[TransactionRecord]) -> TypeTotals {
    let mut amounts = TypeAmounts::default();
    for record in records {
        amounts.add(record.kind, super::aggregator::sanitize_amount(record.amount));
    }

    TypeTotals {
        amounts,
        balance: amounts.income - amounts.expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn record(kind: TransactionType, amount: f64) -> TransactionRecord {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        TransactionRecord::new(date, kind, "Misc", amount).unwrap()
    }

    #[test]
    fn test_balance_is_income_minus_expense() {
        let records = vec![
            record(TransactionType::Income, 3000.0),
            record(TransactionType::Expense, 1200.5),
            record(TransactionType::Savings, 500.0),
            record(TransactionType::Sadaqah, 50.0),
            record(TransactionType::Expense, 99.5),
        ];

        let totals = type_totals(&records);
        assert_relative_eq!(totals.get(TransactionType::Income), 3000.0);
        assert_relative_eq!(totals.get(TransactionType::Expense), 1300.0);
        assert_relative_eq!(totals.get(TransactionType::Savings), 500.0);
        assert_relative_eq!(totals.get(TransactionType::Sadaqah), 50.0);
        assert_relative_eq!(totals.balance, 1700.0);
    }

    #[test]
    fn test_empty_input() {
        let totals = type_totals(&[]);
        assert_eq!(totals, TypeTotals::default());
    }
}
