//! Transaction record structures matching the budget entry format

use crate::error::{FinwizError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of money movement a record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    Savings,
    /// Voluntary charity
    Sadaqah,
}

impl TransactionType {
    /// Every type, in display order
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Income,
        TransactionType::Expense,
        TransactionType::Savings,
        TransactionType::Sadaqah,
    ];

    /// Lowercase name used in stored rows and chart keys
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Savings => "savings",
            TransactionType::Sadaqah => "sadaqah",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = FinwizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            "savings" => Ok(TransactionType::Savings),
            "sadaqah" => Ok(TransactionType::Sadaqah),
            _ => Err(FinwizError::UnknownTransactionType(s.to_string())),
        }
    }
}

/// A single dated budget entry supplied by the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar date of the entry
    pub date: NaiveDate,

    /// Income, expense, savings or sadaqah
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// User-defined category label
    pub category: String,

    /// Non-negative currency amount
    pub amount: f64,
}

impl TransactionRecord {
    /// Create a record, rejecting negative amounts.
    ///
    /// Non-finite amounts are kept as given; the aggregator treats them as
    /// malformed and counts them as zero.
    pub fn new(
        date: NaiveDate,
        kind: TransactionType,
        category: impl Into<String>,
        amount: f64,
    ) -> Result<Self> {
        let category = category.into();
        if amount < 0.0 {
            return Err(FinwizError::NegativeAmount { category, amount });
        }

        Ok(Self {
            date,
            kind,
            category,
            amount,
        })
    }

    /// Month key ("YYYY-MM") this record falls into
    pub fn month_key(&self) -> String {
        crate::aggregation::month_key(self.date)
    }
}

/// Parse a stored amount, coercing anything non-numeric to zero.
///
/// Blank strings, garbage and non-finite values all become `0.0` so a single
/// bad row can never take a chart down.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            log::warn!("Coercing malformed amount {:?} to 0", raw);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_transaction_type_parsing() {
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!(" Expense ".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert_eq!("SAVINGS".parse::<TransactionType>().unwrap(), TransactionType::Savings);
        assert_eq!("sadaqah".parse::<TransactionType>().unwrap(), TransactionType::Sadaqah);

        let err = "transfer".parse::<TransactionType>().unwrap_err();
        assert!(matches!(err, FinwizError::UnknownTransactionType(ref s) if s == "transfer"));
    }

    #[test]
    fn test_record_rejects_negative_amount() {
        let result = TransactionRecord::new(date(2025, 1, 5), TransactionType::Expense, "Food", -3.0);
        assert!(matches!(result, Err(FinwizError::NegativeAmount { .. })));

        let zero = TransactionRecord::new(date(2025, 1, 5), TransactionType::Expense, "Food", 0.0);
        assert!(zero.is_ok());
    }

    #[test]
    fn test_month_key_is_zero_padded() {
        let record =
            TransactionRecord::new(date(2025, 3, 31), TransactionType::Income, "Salary", 10.0).unwrap();
        assert_eq!(record.month_key(), "2025-03");
    }

    #[test]
    fn test_parse_amount_coerces_garbage() {
        assert_eq!(parse_amount("12.50"), 12.5);
        assert_eq!(parse_amount(" 7 "), 7.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_record_serializes_type_field() {
        let record =
            TransactionRecord::new(date(2025, 2, 1), TransactionType::Sadaqah, "Mosque", 20.0).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "sadaqah");
        assert_eq!(json["date"], "2025-02-01");
    }
}
