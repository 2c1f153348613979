//! Monthly trend series with insertion-ordered buckets

use crate::records::TransactionType;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Summed amounts per transaction type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeAmounts {
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
    pub sadaqah: f64,
}

impl TypeAmounts {
    /// Add an amount to the given type's total
    pub fn add(&mut self, kind: TransactionType, amount: f64) {
        *self.get_mut(kind) += amount;
    }

    pub fn get(&self, kind: TransactionType) -> f64 {
        match kind {
            TransactionType::Income => self.income,
            TransactionType::Expense => self.expense,
            TransactionType::Savings => self.savings,
            TransactionType::Sadaqah => self.sadaqah,
        }
    }

    fn get_mut(&mut self, kind: TransactionType) -> &mut f64 {
        match kind {
            TransactionType::Income => &mut self.income,
            TransactionType::Expense => &mut self.expense,
            TransactionType::Savings => &mut self.savings,
            TransactionType::Sadaqah => &mut self.sadaqah,
        }
    }

    /// Check whether every type is still zero
    pub fn is_empty(&self) -> bool {
        TransactionType::ALL.iter().all(|&kind| self.get(kind) == 0.0)
    }
}

/// One calendar month of the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// "YYYY-MM"
    pub month: String,

    #[serde(flatten)]
    pub totals: TypeAmounts,
}

impl MonthBucket {
    pub fn new(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            totals: TypeAmounts::default(),
        }
    }
}

/// Ordered month buckets: the fixed window first, then any months that
/// records fell into outside the window, in the order they were met.
///
/// Out-of-window months are appended rather than sorted, so they may sit
/// after the window even when they are older than it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    buckets: Vec<MonthBucket>,
    index: HashMap<String, usize>,
    window_len: usize,
}

impl MonthlySeries {
    /// Create a zero-filled series from ordered window keys
    pub fn with_window<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut series = Self::default();
        for key in keys {
            series.bucket_mut(key.into());
        }
        series.window_len = series.buckets.len();
        series
    }

    /// Bucket for a month key, appended zero-filled if not yet present
    pub fn bucket_mut(&mut self, key: String) -> &mut MonthBucket {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.buckets.len();
                self.index.insert(key.clone(), idx);
                self.buckets.push(MonthBucket::new(key));
                idx
            }
        };
        &mut self.buckets[idx]
    }

    /// Look up a month's bucket by key
    pub fn get(&self, key: &str) -> Option<&MonthBucket> {
        self.index.get(key).map(|&idx| &self.buckets[idx])
    }

    /// Number of months in the requested window
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// The requested window, oldest first
    pub fn window(&self) -> &[MonthBucket] {
        &self.buckets[..self.window_len]
    }

    /// Months outside the window, in encounter order
    pub fn extensions(&self) -> &[MonthBucket] {
        &self.buckets[self.window_len..]
    }

    pub fn buckets(&self) -> &[MonthBucket] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthBucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of one type over the window months only
    pub fn window_total(&self, kind: TransactionType) -> f64 {
        self.window().iter().map(|b| b.totals.get(kind)).sum()
    }

    /// Sum of one type over every bucket, extensions included
    pub fn total(&self, kind: TransactionType) -> f64 {
        self.buckets.iter().map(|b| b.totals.get(kind)).sum()
    }
}

impl<'a> IntoIterator for &'a MonthlySeries {
    type Item = &'a MonthBucket;
    type IntoIter = std::slice::Iter<'a, MonthBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

impl Serialize for MonthlySeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.buckets)
    }
}
