//! All-time category breakdown per transaction type

use crate::records::TransactionType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category totals for each transaction type over the full input.
///
/// Unlike the monthly series this is not windowed: category charts show
/// every record that was supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryBreakdown {
    by_type: BTreeMap<TransactionType, BTreeMap<String, f64>>,
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
}

/// All slices for one transaction type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlices {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub data: Vec<CategorySlice>,
}

impl Default for CategoryBreakdown {
    fn default() -> Self {
        Self {
            by_type: TransactionType::ALL
                .iter()
                .map(|&kind| (kind, BTreeMap::new()))
                .collect(),
        }
    }
}

impl CategoryBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a type's category, creating the category at zero
    pub fn add(&mut self, kind: TransactionType, category: &str, amount: f64) {
        let categories = self.by_type.entry(kind).or_default();
        *categories.entry(category.to_string()).or_insert(0.0) += amount;
    }

    /// Categories and totals for one type
    pub fn categories(&self, kind: TransactionType) -> impl Iterator<Item = (&str, f64)> {
        self.by_type
            .get(&kind)
            .into_iter()
            .flat_map(|categories| categories.iter().map(|(name, &value)| (name.as_str(), value)))
    }

    pub fn amount(&self, kind: TransactionType, category: &str) -> Option<f64> {
        self.by_type.get(&kind).and_then(|categories| categories.get(category).copied())
    }

    /// Sum across every category of a type
    pub fn type_total(&self, kind: TransactionType) -> f64 {
        self.categories(kind).map(|(_, value)| value).sum()
    }

    /// Pie chart data, one entry per type in display order
    pub fn to_slices(&self) -> Vec<TypeSlices> {
        TransactionType::ALL
            .iter()
            .map(|&kind| TypeSlices {
                kind,
                data: self
                    .categories(kind)
                    .map(|(name, value)| CategorySlice {
                        name: name.to_string(),
                        value,
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_present_when_empty() {
        let breakdown = CategoryBreakdown::new();
        let slices = breakdown.to_slices();
        assert_eq!(slices.len(), 4);
        assert!(slices.iter().all(|s| s.data.is_empty()));
    }

    #[test]
    fn test_categories_are_per_type() {
        let mut breakdown = CategoryBreakdown::new();
        breakdown.add(TransactionType::Expense, "Food", 10.0);
        breakdown.add(TransactionType::Expense, "Food", 2.5);
        breakdown.add(TransactionType::Income, "Food", 1.0);
        breakdown.add(TransactionType::Expense, "Rent", 0.0);

        assert_eq!(breakdown.amount(TransactionType::Expense, "Food"), Some(12.5));
        assert_eq!(breakdown.amount(TransactionType::Income, "Food"), Some(1.0));
        assert_eq!(breakdown.amount(TransactionType::Expense, "Rent"), Some(0.0));
        assert_eq!(breakdown.amount(TransactionType::Savings, "Food"), None);
        assert_eq!(breakdown.type_total(TransactionType::Expense), 12.5);
    }

    #[test]
    fn test_serializes_keyed_by_type() {
        let mut breakdown = CategoryBreakdown::new();
        breakdown.add(TransactionType::Sadaqah, "Orphans", 30.0);

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["sadaqah"]["Orphans"], 30.0);
        assert!(json["income"].as_object().unwrap().is_empty());
    }
}
